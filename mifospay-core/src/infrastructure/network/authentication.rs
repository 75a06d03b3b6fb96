use super::ApiClient;
use crate::domain::entities::{AuthenticationPayload, UserInfo};
use crate::domain::repositories::AuthenticationRepository;
use crate::shared::types::WalletResult;
use async_trait::async_trait;

#[async_trait]
impl AuthenticationRepository for ApiClient {
    async fn authenticate(&self, username: &str, password: &str) -> WalletResult<UserInfo> {
        let payload = AuthenticationPayload::new(username, password);
        let mut info: UserInfo = self.post_anonymous("authentication", &payload).await?;
        // Some deployments omit the key; it is derived from the credentials
        if info.authenticated && info.base64_encoded_authentication_key.trim().is_empty() {
            log::debug!("Authentication key missing from response, deriving it");
            info.base64_encoded_authentication_key = payload.basic_key();
        }
        log::info!("Authenticated {} with {} client(s)", info.username, info.clients.len());
        Ok(info)
    }
}
