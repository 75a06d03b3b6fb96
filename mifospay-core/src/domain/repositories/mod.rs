//! Domain repositories
//!
//! This module contains the repository traits for data access. Remote
//! implementations live in `infrastructure::network`, storage-backed ones
//! in `infrastructure::platform`.

pub mod account_repository;
pub mod authentication_repository;
pub mod client_repository;
pub mod kyc_level_repository;
pub mod saved_card_repository;
pub mod search_repository;
pub mod session_repository;
pub mod standing_instruction_repository;
pub mod storage_repository;

// Re-export repositories
pub use account_repository::*;
pub use authentication_repository::*;
pub use client_repository::*;
pub use kyc_level_repository::*;
pub use saved_card_repository::*;
pub use search_repository::*;
pub use session_repository::*;
pub use standing_instruction_repository::*;
pub use storage_repository::*;
