//! KYC level-one records live in a Fineract datatable keyed by client id

use super::ApiClient;
use crate::domain::entities::KYCLevel1Details;
use crate::domain::repositories::KycLevelRepository;
use crate::shared::constants::{DEFAULT_DATE_FORMAT, DEFAULT_LOCALE, KYC_LEVEL1_DATATABLE};
use crate::shared::types::{ClientId, ConfirmationToken, WalletResult};
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

/// Datatable writes need the locale and date format for `dob`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DatatableRow<'a> {
    #[serde(flatten)]
    details: &'a KYCLevel1Details,
    locale: &'static str,
    date_format: &'static str,
}

impl<'a> DatatableRow<'a> {
    fn new(details: &'a KYCLevel1Details) -> Self {
        Self {
            details,
            locale: DEFAULT_LOCALE,
            date_format: DEFAULT_DATE_FORMAT,
        }
    }
}

fn datatable_path(client_id: ClientId) -> String {
    format!("datatables/{}/{}", KYC_LEVEL1_DATATABLE, client_id)
}

#[async_trait]
impl KycLevelRepository for ApiClient {
    async fn fetch_kyc_level1_details(
        &self,
        client_id: ClientId,
    ) -> WalletResult<Option<KYCLevel1Details>> {
        let rows: Vec<KYCLevel1Details> = self.get(&datatable_path(client_id), &[]).await?;
        Ok(rows.into_iter().next())
    }

    async fn add_kyc_level1_details(
        &self,
        client_id: ClientId,
        details: &KYCLevel1Details,
    ) -> WalletResult<ConfirmationToken> {
        details.validate()?;
        let row = DatatableRow::new(details);
        self.command(Method::POST, &datatable_path(client_id), &[], Some(&row))
            .await
    }

    async fn update_kyc_level1_details(
        &self,
        client_id: ClientId,
        details: &KYCLevel1Details,
    ) -> WalletResult<ConfirmationToken> {
        details.validate()?;
        let row = DatatableRow::new(details);
        self.command(Method::PUT, &datatable_path(client_id), &[], Some(&row))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::network::test_server::{in_memory_session, MockBackend, Route};
    use crate::shared::error::WalletError;

    const KYC_PATH: &str = "/api/v1/datatables/kyc_level1_details/42";

    fn details() -> KYCLevel1Details {
        KYCLevel1Details {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            mobile_no: "5551234".to_string(),
            dob: "10 December 1815".to_string(),
            address_line1: "12 St James's Square".to_string(),
            current_level: "1".to_string(),
            ..KYCLevel1Details::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_missing_record_is_none() {
        let backend = MockBackend::start(vec![Route::json("GET", KYC_PATH, 200, "[]")]).await;
        let client = ApiClient::new(&backend.config(), in_memory_session()).expect("client");

        assert_eq!(client.fetch_kyc_level1_details(42).await.expect("fetched"), None);
    }

    #[tokio::test]
    async fn test_fetch_first_row() {
        let backend = MockBackend::start(vec![Route::json(
            "GET",
            KYC_PATH,
            200,
            r#"[{"firstName": "Ada", "lastName": "Lovelace", "mobileNo": "5551234",
                "dob": "10 December 1815", "addressLine1": "12 St James's Square", "currentLevel": "1"}]"#,
        )])
        .await;
        let client = ApiClient::new(&backend.config(), in_memory_session()).expect("client");

        assert_eq!(client.fetch_kyc_level1_details(42).await.expect("fetched"), Some(details()));
    }

    #[tokio::test]
    async fn test_fetch_is_repeatable() {
        let backend = MockBackend::start(vec![Route::json(
            "GET",
            KYC_PATH,
            200,
            r#"[{"firstName": "Ada", "lastName": "Lovelace", "mobileNo": "5551234",
                "dob": "10 December 1815", "addressLine1": "12 St James's Square", "currentLevel": "1"}]"#,
        )])
        .await;
        let client = ApiClient::new(&backend.config(), in_memory_session()).expect("client");

        let first = client.fetch_kyc_level1_details(42).await.expect("fetched");
        let second = client.fetch_kyc_level1_details(42).await.expect("fetched");
        assert_eq!(first, second);
        assert_eq!(first, Some(details()));
        assert_eq!(backend.methods(), vec!["GET", "GET"]);
    }

    #[tokio::test]
    async fn test_add_and_update_use_distinct_methods() {
        let backend = MockBackend::start(vec![
            Route::json("POST", KYC_PATH, 200, r#"{"clientId": 42, "resourceId": 42}"#),
            Route::json("PUT", KYC_PATH, 200, r#"{"clientId": 42, "resourceId": 42}"#),
        ])
        .await;
        let client = ApiClient::new(&backend.config(), in_memory_session()).expect("client");

        assert_eq!(client.add_kyc_level1_details(42, &details()).await.expect("added"), "42");
        assert_eq!(client.update_kyc_level1_details(42, &details()).await.expect("updated"), "42");

        let requests = backend.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[1].method, "PUT");
        let body = requests[0].json();
        assert_eq!(body["firstName"], "Ada");
        assert_eq!(body["locale"], "en");
        assert_eq!(body["dateFormat"], "dd MMMM yyyy");
    }

    #[tokio::test]
    async fn test_add_existing_record_error_surfaces() {
        let backend = MockBackend::start(vec![Route::json(
            "POST",
            KYC_PATH,
            403,
            r#"{"defaultUserMessage": "Only one row allowed for this datatable"}"#,
        )])
        .await;
        let client = ApiClient::new(&backend.config(), in_memory_session()).expect("client");

        let result = client.add_kyc_level1_details(42, &details()).await;
        assert_eq!(result, Err(WalletError::api(403, "Only one row allowed for this datatable")));
    }

    #[tokio::test]
    async fn test_invalid_details_are_not_sent() {
        let backend = MockBackend::start(vec![]).await;
        let client = ApiClient::new(&backend.config(), in_memory_session()).expect("client");

        let incomplete = KYCLevel1Details { first_name: String::new(), ..details() };
        assert!(client.update_kyc_level1_details(42, &incomplete).await.is_err());
        assert!(backend.requests().is_empty());
    }
}
