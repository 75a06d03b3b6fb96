use super::ApiClient;
use crate::domain::entities::{Client, ClientAccounts};
use crate::domain::repositories::ClientRepository;
use crate::shared::types::{ClientId, WalletResult};
use async_trait::async_trait;

#[async_trait]
impl ClientRepository for ApiClient {
    async fn get_client(&self, client_id: ClientId) -> WalletResult<Client> {
        self.get(&format!("clients/{}", client_id), &[]).await
    }

    async fn get_client_accounts(&self, client_id: ClientId) -> WalletResult<ClientAccounts> {
        self.get(&format!("clients/{}/accounts", client_id), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::network::test_server::{in_memory_session, MockBackend, Route};

    #[tokio::test]
    async fn test_get_client_is_repeatable() {
        let backend = MockBackend::start(vec![Route::json(
            "GET",
            "/api/v1/clients/42",
            200,
            r#"{"id": 42, "accountNo": "000000042", "displayName": "Ada Lovelace", "officeId": 1, "active": true}"#,
        )])
        .await;
        let client = ApiClient::new(&backend.config(), in_memory_session()).expect("client");

        let first = client.get_client(42).await.expect("client");
        let second = client.get_client(42).await.expect("client");
        assert_eq!(first, second);
        assert_eq!(first.display_name, "Ada Lovelace");
        assert_eq!(backend.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_get_client_accounts() {
        let backend = MockBackend::start(vec![Route::json(
            "GET",
            "/api/v1/clients/42/accounts",
            200,
            r#"{"savingsAccounts": [
                {"id": 100, "accountNo": "000000100", "status": {"id": 300, "active": true, "closed": false}},
                {"id": 101, "accountNo": "000000101", "status": {"id": 600, "active": false, "closed": true}}
            ]}"#,
        )])
        .await;
        let client = ApiClient::new(&backend.config(), in_memory_session()).expect("client");

        let accounts = client.get_client_accounts(42).await.expect("accounts");
        assert_eq!(accounts.savings_accounts.len(), 2);
        assert_eq!(accounts.active().map(|a| a.id).collect::<Vec<_>>(), vec![100]);
    }
}
