use super::ApiClient;
use crate::domain::entities::AccountResult;
use crate::domain::repositories::SearchRepository;
use crate::shared::types::WalletResult;
use crate::shared::utils::require_non_empty;
use async_trait::async_trait;

#[async_trait]
impl SearchRepository for ApiClient {
    async fn search_resources(
        &self,
        query: &str,
        resources: &str,
        exact_match: bool,
    ) -> WalletResult<Vec<AccountResult>> {
        require_non_empty("Search query", query)?;
        self.get(
            "search",
            &[
                ("query", query.trim().to_string()),
                ("resource", resources.to_string()),
                ("exactMatch", exact_match.to_string()),
            ],
        )
        .await
    }
}
