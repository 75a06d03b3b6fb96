//! Storage repository for data access
//!
//! Byte-level key/value persistence underneath the session store.

use crate::shared::types::WalletResult;
use async_trait::async_trait;

/// Storage repository trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// Store data under a key, replacing any previous value
    async fn store(&self, key: &str, data: &[u8]) -> WalletResult<()>;

    /// Retrieve stored data, `None` when the key was never written
    async fn retrieve(&self, key: &str) -> WalletResult<Option<Vec<u8>>>;

    /// Delete stored data; deleting a missing key succeeds
    async fn delete(&self, key: &str) -> WalletResult<()>;

    /// Check if key exists
    async fn exists(&self, key: &str) -> WalletResult<bool>;
}
