//! Infrastructure layer
//!
//! Concrete implementations of the domain contracts: the Fineract HTTP
//! client in `network`, local persistence and the session store in
//! `platform`.

pub mod network;
pub mod platform;

pub use network::ApiClient;
pub use platform::{EncryptedFileStorage, InMemoryStorage, StoredSession};
