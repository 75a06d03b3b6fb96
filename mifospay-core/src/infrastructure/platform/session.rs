//! Session store over a `StorageRepository`
//!
//! Values are JSON-encoded under fixed keys and cached after the first
//! read, so an encrypted backend pays for key derivation once per field.

use crate::domain::entities::{ClientInfo, UserInfo};
use crate::domain::repositories::{SessionStore, StorageRepository};
use crate::shared::constants::{
    SESSION_KEYS, SESSION_KEY_CLIENT_INFO, SESSION_KEY_TOKEN, SESSION_KEY_USER_INFO,
};
use crate::shared::types::WalletResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use zeroize::Zeroizing;

type Cache = HashMap<&'static str, Option<Zeroizing<Vec<u8>>>>;

pub struct StoredSession {
    storage: Arc<dyn StorageRepository>,
    cache: RwLock<Cache>,
}

impl StoredSession {
    pub fn new(storage: impl StorageRepository + 'static) -> Self {
        Self::from_shared(Arc::new(storage))
    }

    pub fn from_shared(storage: Arc<dyn StorageRepository>) -> Self {
        Self {
            storage,
            cache: RwLock::new(HashMap::new()),
        }
    }

    async fn write<T: Serialize + ?Sized + Sync>(
        &self,
        key: &'static str,
        value: &T,
    ) -> WalletResult<()> {
        let bytes = Zeroizing::new(serde_json::to_vec(value)?);
        self.storage.store(key, &bytes).await?;
        self.cache.write().await.insert(key, Some(bytes));
        Ok(())
    }

    async fn read<T: DeserializeOwned + Send>(&self, key: &'static str) -> WalletResult<Option<T>> {
        if let Some(cached) = self.cache.read().await.get(key) {
            return Ok(cached.as_deref().map(|b| serde_json::from_slice(b)).transpose()?);
        }

        let bytes = self.storage.retrieve(key).await?.map(Zeroizing::new);
        let value = bytes.as_deref().map(|b| serde_json::from_slice(b)).transpose()?;
        self.cache.write().await.insert(key, bytes);
        Ok(value)
    }
}

#[async_trait]
impl SessionStore for StoredSession {
    async fn update_token(&self, key: &str) -> WalletResult<()> {
        self.write(SESSION_KEY_TOKEN, key).await
    }

    async fn update_client_info(&self, info: &ClientInfo) -> WalletResult<()> {
        self.write(SESSION_KEY_CLIENT_INFO, info).await
    }

    async fn update_user_info(&self, info: &UserInfo) -> WalletResult<()> {
        self.write(SESSION_KEY_USER_INFO, info).await
    }

    async fn log_out(&self) -> WalletResult<()> {
        let mut first_error = None;
        for key in SESSION_KEYS {
            let result = self.storage.delete(key).await;
            let mut cache = self.cache.write().await;
            match result {
                Ok(()) => {
                    cache.insert(key, None);
                }
                Err(e) => {
                    // Storage still holds the value; force the next read through
                    cache.remove(key);
                    log::warn!("Failed to clear {}: {}", key, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => {
                log::info!("Session cleared");
                Ok(())
            }
        }
    }

    async fn token(&self) -> WalletResult<Option<String>> {
        self.read(SESSION_KEY_TOKEN).await
    }

    async fn client_info(&self) -> WalletResult<Option<ClientInfo>> {
        self.read(SESSION_KEY_CLIENT_INFO).await
    }

    async fn user_info(&self) -> WalletResult<Option<UserInfo>> {
        self.read(SESSION_KEY_USER_INFO).await
    }
}
