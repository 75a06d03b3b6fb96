//! Payment QR payload
//!
//! The payload is encoded into the QR image as compact JSON. Scanning the
//! image is the platform's job; this module only encodes and decodes the
//! text and projects it onto a search result for the transfer flow.

use crate::domain::entities::search::AccountResult;
use crate::shared::constants::{QR_ENTITY_NAME, QR_ENTITY_TYPE, QR_PARENT_TYPE};
use crate::shared::types::{AccountId, Amount, ClientId, OfficeId, WalletResult};
use crate::shared::utils::{require_id, require_non_empty, validate_amount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQrData {
    pub client_id: ClientId,
    pub client_name: String,
    pub account_no: String,
    pub account_id: AccountId,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_id: Option<OfficeId>,
    /// Requested amount; absent when the payer chooses it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl PaymentQrData {
    /// Project onto a search result. QR payments always target the
    /// client's wallet savings account, so the entity and parent types
    /// are fixed.
    pub fn to_account(&self) -> AccountResult {
        AccountResult {
            entity_id: self.account_id,
            entity_account_no: self.account_no.clone(),
            entity_external_id: None,
            entity_name: QR_ENTITY_NAME.to_string(),
            entity_type: QR_ENTITY_TYPE.to_string(),
            parent_id: self.client_id,
            parent_name: self.client_name.clone(),
            parent_type: QR_PARENT_TYPE.to_string(),
            sub_entity_type: String::new(),
        }
    }

    pub fn validate(&self) -> WalletResult<()> {
        require_id("Client id", self.client_id)?;
        require_id("Account id", self.account_id)?;
        require_non_empty("Account number", &self.account_no)?;
        require_non_empty("Currency", &self.currency)?;
        if let Some(amount) = &self.amount {
            validate_amount(amount)?;
        }
        Ok(())
    }

    /// Text to render into the QR image
    pub fn to_qr_string(&self) -> WalletResult<String> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }

    /// Parse scanned QR text
    pub fn from_qr_string(text: &str) -> WalletResult<Self> {
        let data: Self = serde_json::from_str(text.trim())?;
        data.validate()?;
        Ok(data)
    }
}
