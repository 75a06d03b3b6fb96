//! Application use cases

pub mod login;

pub use login::*;
