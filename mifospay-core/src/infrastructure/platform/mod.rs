//! Local persistence
//!
//! `StorageRepository` implementations plus the session store built on
//! top of them.
//!
//! SECURITY: `EncryptedFileStorage` implements hardened storage with:
//! - AES-256-GCM with a fresh nonce per write
//! - Argon2id key derivation from the configured passphrase, per-key salt
//! - Hashed file names so stored keys cannot be enumerated
//! - Owner-only file permissions and zeroized key material

pub mod secure_storage;
pub mod session;

pub use secure_storage::{EncryptedFileStorage, InMemoryStorage};
pub use session::StoredSession;
