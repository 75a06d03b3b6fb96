//! Domain entities and value objects
//!
//! This module contains the core domain entities and value objects
//! exchanged with the wallet backend.

pub mod account;
pub mod auth;
pub mod client;
pub mod command;
pub mod kyc;
pub mod qr;
pub mod saved_card;
pub mod search;
pub mod standing_instruction;

// Re-export entities
pub use account::*;
pub use auth::*;
pub use client::*;
pub use command::*;
pub use kyc::*;
pub use qr::*;
pub use saved_card::*;
pub use search::*;
pub use standing_instruction::*;
