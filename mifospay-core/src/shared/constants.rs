//! Constants used throughout the wallet core

use crate::shared::types::AccountType;

// Backend defaults
pub const DEFAULT_BASE_URL: &str = "https://tt.mifos.community/fineract-provider/api/v1/";
pub const DEFAULT_TENANT: &str = "default";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 0;

// Request headers
pub const HEADER_TENANT: &str = "Fineract-Platform-TenantId";
pub const HEADER_REQUEST_ID: &str = "X-Request-Id";
pub const AUTH_SCHEME_BASIC: &str = "Basic";

// Environment
pub const ENV_PREFIX: &str = "MIFOSPAY";

// Backend formatting contract
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_DATE_FORMAT: &str = "dd MMMM yyyy";
/// chrono rendering of `DEFAULT_DATE_FORMAT`.
pub const DEFAULT_DATE_PATTERN: &str = "%d %B %Y";
pub const MONTH_DAY_FORMAT: &str = "dd MMMM";
pub const MONTH_DAY_PATTERN: &str = "%d %B";

// Account types
pub const ACCOUNT_TYPE_LOAN: AccountType = 1;
pub const ACCOUNT_TYPE_SAVINGS: AccountType = 2;

// QR payment projection
pub const QR_ENTITY_TYPE: &str = "SAVING";
pub const QR_PARENT_TYPE: &str = "client";
pub const QR_ENTITY_NAME: &str = "WALLET";

// Datatables
pub const KYC_LEVEL1_DATATABLE: &str = "kyc_level1_details";

// Search resources
pub const SEARCH_RESOURCE_CLIENTS: &str = "clients";
pub const SEARCH_RESOURCE_SAVINGS: &str = "savings";
pub const SEARCH_RESOURCE_GROUPS: &str = "groups";
pub const SEARCH_RESOURCE_CENTERS: &str = "centers";

// Session storage
pub const STORAGE_DIR_NAME: &str = "mifospay";
pub const SESSION_KEY_TOKEN: &str = "session.token";
pub const SESSION_KEY_CLIENT_INFO: &str = "session.client_info";
pub const SESSION_KEY_USER_INFO: &str = "session.user_info";
pub const SESSION_KEYS: [&str; 3] = [
    SESSION_KEY_TOKEN,
    SESSION_KEY_CLIENT_INFO,
    SESSION_KEY_USER_INFO,
];

// Encryption
pub const NONCE_LEN: usize = 12;
pub const SALT_LEN: usize = 32;
pub const KEY_LEN: usize = 32;
pub const ARGON2_MEMORY_KIB: u32 = 65536;
pub const ARGON2_ITERATIONS: u32 = 3;
pub const ARGON2_PARALLELISM: u32 = 1;
