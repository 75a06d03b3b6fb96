use crate::shared::error::WalletError;
use crate::shared::types::{ClientId, ConfirmationToken, OfficeId, WalletResult};
use serde::{Deserialize, Serialize};

/// Acknowledgement returned by the backend for every write
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    #[serde(default)]
    pub office_id: Option<OfficeId>,
    #[serde(default)]
    pub client_id: Option<ClientId>,
    #[serde(default)]
    pub savings_id: Option<i64>,
    #[serde(default)]
    pub resource_id: Option<i64>,
    #[serde(default)]
    pub resource_identifier: Option<String>,
}

impl CommandResponse {
    /// Non-empty token identifying the written resource
    pub fn confirmation_token(&self) -> WalletResult<ConfirmationToken> {
        if let Some(id) = self.resource_id {
            return Ok(id.to_string());
        }
        if let Some(identifier) = self.resource_identifier.as_deref().map(str::trim) {
            if !identifier.is_empty() {
                return Ok(identifier.to_string());
            }
        }
        if let Some(id) = self.savings_id.or(self.client_id) {
            return Ok(id.to_string());
        }
        Err(WalletError::serialization("Write response carried no resource id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_prefers_resource_id() {
        let json = r#"{"officeId": 1, "clientId": 42, "resourceId": 9001}"#;
        let response: CommandResponse = serde_json::from_str(json).expect("parsable");
        assert_eq!(response.confirmation_token().expect("token"), "9001");
    }

    #[test]
    fn test_token_falls_back() {
        let response = CommandResponse {
            resource_identifier: Some("TRF-17".to_string()),
            ..CommandResponse::default()
        };
        assert_eq!(response.confirmation_token().expect("token"), "TRF-17");

        let response = CommandResponse { client_id: Some(42), ..CommandResponse::default() };
        assert_eq!(response.confirmation_token().expect("token"), "42");
    }

    #[test]
    fn test_empty_response_is_an_error() {
        let blank = CommandResponse {
            resource_identifier: Some("  ".to_string()),
            ..CommandResponse::default()
        };
        assert!(blank.confirmation_token().is_err());
        assert!(CommandResponse::default().confirmation_token().is_err());
    }
}
