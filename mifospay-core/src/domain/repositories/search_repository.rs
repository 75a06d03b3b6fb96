//! Search repository

use crate::domain::entities::AccountResult;
use crate::shared::types::WalletResult;
use async_trait::async_trait;

#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Search clients, groups, centers or accounts. `resources` is a comma
    /// separated list such as `clients,savings`.
    async fn search_resources(
        &self,
        query: &str,
        resources: &str,
        exact_match: bool,
    ) -> WalletResult<Vec<AccountResult>>;
}
