//! Client repository

use crate::domain::entities::{Client, ClientAccounts};
use crate::shared::types::{ClientId, WalletResult};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Full client details
    async fn get_client(&self, client_id: ClientId) -> WalletResult<Client>;

    /// Accounts owned by the client
    async fn get_client_accounts(&self, client_id: ClientId) -> WalletResult<ClientAccounts>;
}
