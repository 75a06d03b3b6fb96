//! Session store contract
//!
//! Holds the authentication key and the cached user and client info.
//! Always injected; there is no process-wide session.

use crate::domain::entities::{ClientInfo, UserInfo};
use crate::shared::types::WalletResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn update_token(&self, key: &str) -> WalletResult<()>;

    async fn update_client_info(&self, info: &ClientInfo) -> WalletResult<()>;

    async fn update_user_info(&self, info: &UserInfo) -> WalletResult<()>;

    /// Clear every persisted session field
    async fn log_out(&self) -> WalletResult<()>;

    async fn token(&self) -> WalletResult<Option<String>>;

    async fn client_info(&self) -> WalletResult<Option<ClientInfo>>;

    async fn user_info(&self) -> WalletResult<Option<UserInfo>>;

    async fn is_authenticated(&self) -> WalletResult<bool> {
        Ok(self.token().await?.is_some())
    }
}
