//! Domain layer - entities and repository contracts
//!
//! Everything the wallet exchanges with the backend, and the traits the
//! infrastructure layer implements.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
