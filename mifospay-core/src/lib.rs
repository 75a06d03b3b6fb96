//! Mifos Pay Wallet Core
//!
//! Data-access core for the Mifos Pay wallet.
//! Talks to the Fineract self-service API and keeps the session on device.
//!
//! ## Architecture
//!
//! - **Domain**: Entities and the repository contracts
//! - **Application**: Login orchestration
//! - **Infrastructure**: Fineract HTTP client, encrypted storage and the session store
//! - **Shared**: Common types, `DataState`, configuration, constants and utilities
//!
//! ## Security Features
//!
//! - Session token encrypted at rest (AES-256-GCM, Argon2id)
//! - Secrets zeroized and masked in `Debug` output
//! - No process-wide session; the store is always injected
//!
//! ## Usage
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use mifospay_core::{init_wallet_core, AccountRepository};
//!
//! # async fn run() -> Result<(), mifospay_core::WalletError> {
//! let core = init_wallet_core().await?;
//! let user = core.login().execute("mifos", "password").await?;
//!
//! if let Some(client_id) = user.primary_client() {
//!     let mut accounts = core.api().get_accounts(client_id);
//!     while let Some(state) = accounts.next().await {
//!         println!("{:?}", state);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use tokio::runtime::Handle;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::{LoginStep, LoginUseCase};
pub use domain::entities::*;
pub use domain::repositories::*;
pub use infrastructure::{ApiClient, EncryptedFileStorage, InMemoryStorage, StoredSession};
pub use shared::config::CoreConfig;
pub use shared::data_state::{DataState, DataStateStream};
pub use shared::error::WalletError;
pub use shared::types::{ConfirmationToken, WalletResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize logging from `RUST_LOG`, defaulting to `info`.
/// Safe to call more than once.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Initialize the wallet core with configuration from .env or safe defaults
pub async fn init_wallet_core() -> WalletResult<WalletCore> {
    let config = CoreConfig::load()?;
    WalletCore::new(config, Handle::current())
}

/// Main wallet core struct that wires the repositories together
pub struct WalletCore {
    config: CoreConfig,
    session: Arc<dyn SessionStore>,
    api: ApiClient,
    login: LoginUseCase,
}

impl WalletCore {
    /// Encrypted on-disk session when a passphrase is configured, else in memory
    pub fn new(config: CoreConfig, runtime: Handle) -> WalletResult<Self> {
        let config = config.validated()?;
        let session: Arc<dyn SessionStore> = match config.storage_passphrase.as_deref() {
            Some(passphrase) => {
                let storage = EncryptedFileStorage::new(config.resolved_storage_dir(), passphrase)?;
                Arc::new(StoredSession::new(storage))
            }
            None => {
                log::warn!("No storage passphrase configured; session will not survive restarts");
                Arc::new(StoredSession::new(InMemoryStorage::new()))
            }
        };
        Self::with_session(config, session, runtime)
    }

    pub fn with_session(
        config: CoreConfig,
        session: Arc<dyn SessionStore>,
        runtime: Handle,
    ) -> WalletResult<Self> {
        let api = ApiClient::new(&config, session.clone())?;
        let remote = Arc::new(api.clone());
        let login = LoginUseCase::new(remote.clone(), remote, session.clone(), runtime);
        log::info!("{} {} using {} (tenant {})", NAME, VERSION, api.base_url(), config.tenant);

        Ok(Self {
            config,
            session,
            api,
            login,
        })
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Remote repositories: accounts, KYC, saved cards, standing
    /// instructions, search, clients and authentication
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn login(&self) -> &LoginUseCase {
        &self.login
    }

    pub async fn log_out(&self) -> WalletResult<()> {
        self.session.log_out().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_wallet_core_initialization() {
        let core = WalletCore::new(CoreConfig::default(), Handle::current())
            .expect("Failed to initialize wallet core");

        assert_eq!(core.api().base_url().as_str(), shared::constants::DEFAULT_BASE_URL);
        assert!(!core.session().is_authenticated().await.expect("session read"));
    }

    #[tokio::test]
    async fn test_wallet_core_with_encrypted_session() {
        let dir = TempDir::new().expect("tempdir");
        let config = CoreConfig {
            storage_dir: Some(dir.path().join("store")),
            storage_passphrase: Some("correct horse".to_string()),
            ..CoreConfig::default()
        };
        let core =
            WalletCore::new(config, Handle::current()).expect("Failed to initialize wallet core");

        assert!(dir.path().join("store").is_dir());
        assert_eq!(core.session().token().await.expect("session read"), None);
        core.log_out().await.expect("logout");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let config = CoreConfig {
            tenant: String::new(),
            ..CoreConfig::default()
        };
        assert!(WalletCore::new(config, runtime.handle().clone()).is_err());
    }
}
