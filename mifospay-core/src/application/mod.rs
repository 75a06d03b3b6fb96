//! Application layer - use cases
//!
//! Orchestration over the domain repository contracts.

pub mod use_cases;

pub use use_cases::*;
