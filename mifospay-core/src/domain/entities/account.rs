//! Account and transfer entities
//!
//! Amounts read from the backend are `Decimal`; amounts sent to it are
//! validated decimal strings. Neither ever passes through a float.

use crate::shared::constants::{DEFAULT_DATE_FORMAT, DEFAULT_LOCALE};
use crate::shared::error::WalletError;
use crate::shared::types::{
    AccountId, AccountType, Amount, ClientId, Currency, EnumOption, OfficeId, TransactionId,
    TransferId, WalletResult,
};
use crate::shared::utils::{
    date_from_parts, format_backend_date, require_id, require_non_empty, today_backend_date,
    validate_amount,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatus {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub closed: bool,
}

/// Savings account summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    #[serde(default)]
    pub account_no: String,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub client_id: Option<ClientId>,
    #[serde(default)]
    pub status: Option<AccountStatus>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub account_balance: Option<Decimal>,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status.as_ref().map(|s| s.active && !s.closed).unwrap_or(false)
    }

    pub fn balance(&self) -> Decimal {
        self.account_balance.unwrap_or(Decimal::ZERO)
    }
}

/// One side of a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferEndpoint {
    pub office_id: OfficeId,
    pub client_id: ClientId,
    pub account_type: AccountType,
    pub account_id: AccountId,
}

impl TransferEndpoint {
    pub fn new(
        office_id: OfficeId,
        client_id: ClientId,
        account_type: AccountType,
        account_id: AccountId,
    ) -> Self {
        Self {
            office_id,
            client_id,
            account_type,
            account_id,
        }
    }

    fn validate(&self, side: &str) -> WalletResult<()> {
        require_id(&format!("{} office id", side), self.office_id)?;
        require_id(&format!("{} client id", side), self.client_id)?;
        require_id(&format!("{} account id", side), self.account_id)?;
        if self.account_type <= 0 {
            return Err(WalletError::validation(format!("{} account type is invalid", side)));
        }
        Ok(())
    }
}

/// Request body for `POST accounttransfers`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountTransferPayload {
    pub from_office_id: OfficeId,
    pub from_client_id: ClientId,
    pub from_account_type: AccountType,
    pub from_account_id: AccountId,
    pub to_office_id: OfficeId,
    pub to_client_id: ClientId,
    pub to_account_type: AccountType,
    pub to_account_id: AccountId,
    pub date_format: String,
    pub locale: String,
    pub transfer_date: String,
    pub transfer_amount: Amount,
    pub transfer_description: String,
}

impl AccountTransferPayload {
    /// Build a validated transfer dated today
    pub fn new(
        from: TransferEndpoint,
        to: TransferEndpoint,
        amount: &str,
        description: impl Into<String>,
    ) -> WalletResult<Self> {
        let payload = Self {
            from_office_id: from.office_id,
            from_client_id: from.client_id,
            from_account_type: from.account_type,
            from_account_id: from.account_id,
            to_office_id: to.office_id,
            to_client_id: to.client_id,
            to_account_type: to.account_type,
            to_account_id: to.account_id,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            transfer_date: today_backend_date(),
            transfer_amount: validate_amount(amount)?,
            transfer_description: description.into(),
        };
        payload.validate()?;
        Ok(payload)
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.transfer_date = format_backend_date(date);
        self
    }

    pub fn from_endpoint(&self) -> TransferEndpoint {
        TransferEndpoint::new(
            self.from_office_id,
            self.from_client_id,
            self.from_account_type,
            self.from_account_id,
        )
    }

    pub fn to_endpoint(&self) -> TransferEndpoint {
        TransferEndpoint::new(
            self.to_office_id,
            self.to_client_id,
            self.to_account_type,
            self.to_account_id,
        )
    }

    pub fn validate(&self) -> WalletResult<()> {
        self.from_endpoint().validate("Source")?;
        self.to_endpoint().validate("Destination")?;
        if self.from_account_type == self.to_account_type
            && self.from_account_id == self.to_account_id
        {
            return Err(WalletError::validation("Cannot transfer to the same account"));
        }
        validate_amount(&self.transfer_amount)?;
        require_non_empty("Transfer date", &self.transfer_date)?;
        require_non_empty("Transfer description", &self.transfer_description)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OfficeRef {
    pub id: OfficeId,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientRef {
    pub id: ClientId,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub office_id: Option<OfficeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountRef {
    pub id: AccountId,
    #[serde(default)]
    pub account_no: String,
}

/// Completed transfer as reported by `GET accounttransfers/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransferDetail {
    pub id: TransferId,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub transfer_amount: Decimal,
    #[serde(default)]
    pub transfer_date: Vec<i32>,
    #[serde(default)]
    pub transfer_description: String,
    #[serde(default)]
    pub reversed: bool,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub from_office: Option<OfficeRef>,
    #[serde(default)]
    pub from_client: Option<ClientRef>,
    #[serde(default)]
    pub from_account_type: Option<EnumOption>,
    #[serde(default)]
    pub from_account: Option<AccountRef>,
    #[serde(default)]
    pub to_office: Option<OfficeRef>,
    #[serde(default)]
    pub to_client: Option<ClientRef>,
    #[serde(default)]
    pub to_account_type: Option<EnumOption>,
    #[serde(default)]
    pub to_account: Option<AccountRef>,
}

impl TransferDetail {
    pub fn date(&self) -> Option<NaiveDate> {
        date_from_parts(&self.transfer_date)
    }
}

/// Savings account transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(default)]
    pub transaction_type: Option<EnumOption>,
    #[serde(default)]
    pub account_id: Option<AccountId>,
    #[serde(default)]
    pub account_no: Option<String>,
    #[serde(default)]
    pub date: Vec<i32>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub running_balance: Option<Decimal>,
    #[serde(default)]
    pub reversed: bool,
}

impl Transaction {
    pub fn date(&self) -> Option<NaiveDate> {
        date_from_parts(&self.date)
    }
}
