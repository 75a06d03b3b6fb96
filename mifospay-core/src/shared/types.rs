use serde::{Deserialize, Serialize};

// Backend identifiers are all 64-bit
pub type ClientId = i64;
pub type OfficeId = i64;
pub type AccountId = i64;
pub type TransactionId = i64;
pub type TransferId = i64;
pub type CardId = i64;
pub type InstructionId = i64;
pub type UserId = i64;

/// Fineract account type code (1 = loan, 2 = savings).
pub type AccountType = i32;

/// Decimal-safe amount, kept as the string the backend sends and receives.
pub type Amount = String;

/// Opaque confirmation token returned by write operations.
pub type ConfirmationToken = String;

/// Generic option entry used throughout Fineract templates and status fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EnumOption {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub value: String,
}

/// Currency attached to accounts and transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub decimal_places: u32,
    #[serde(default)]
    pub display_symbol: Option<String>,
}

/// Paged list envelope used by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub total_filtered_records: u64,
    #[serde(default = "Vec::new")]
    pub page_items: Vec<T>,
}

// Result types for better error handling
pub type WalletResult<T> = Result<T, crate::shared::error::WalletError>;
