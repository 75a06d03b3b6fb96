//! Authentication repository

use crate::domain::entities::UserInfo;
use crate::shared::types::WalletResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    /// Exchange credentials for a session identity
    async fn authenticate(&self, username: &str, password: &str) -> WalletResult<UserInfo>;
}
