//! Wallet core configuration
//!
//! Values come from built-in defaults overridden by `MIFOSPAY_*` environment
//! variables (a `.env` file is loaded first when present).

use crate::shared::constants::{
    DEFAULT_BASE_URL, DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TENANT,
    ENV_PREFIX, STORAGE_DIR_NAME,
};
use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoreConfig {
    pub base_url: String,
    pub tenant: String,
    pub request_timeout_secs: u64,
    /// Refresh period for continuous reads; 0 emits a single terminal state.
    pub refresh_interval_secs: u64,
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
    /// Enables the encrypted on-disk session store when set.
    #[serde(default)]
    pub storage_passphrase: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            tenant: DEFAULT_TENANT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            storage_dir: None,
            storage_passphrase: None,
        }
    }
}

impl CoreConfig {
    /// Load from `.env` and the process environment
    pub fn load() -> WalletResult<Self> {
        dotenv().ok();
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from defaults overlaid with an arbitrary `config` source
    pub fn from_source<S>(source: S) -> WalletResult<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("tenant", DEFAULT_TENANT)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("refresh_interval_secs", DEFAULT_REFRESH_INTERVAL_SECS)?
            .add_source(source)
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        loaded.validated()
    }

    /// Check the values and normalize the base URL to end with `/`
    pub fn validated(mut self) -> WalletResult<Self> {
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let url = Url::parse(&base)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(WalletError::config(format!(
                "Base URL must use http or https, got {}",
                url.scheme()
            )));
        }
        self.base_url = base;

        if self.tenant.trim().is_empty() {
            return Err(WalletError::config("Tenant cannot be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(WalletError::config("Request timeout must be greater than zero"));
        }
        if matches!(&self.storage_passphrase, Some(p) if p.is_empty()) {
            self.storage_passphrase = None;
        }
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        match self.refresh_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Configured storage directory, else the platform data dir
    pub fn resolved_storage_dir(&self) -> PathBuf {
        match &self.storage_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("./secure_storage"))
                .join(STORAGE_DIR_NAME),
        }
    }

    /// Copy safe to print
    pub fn redacted(&self) -> Self {
        Self {
            storage_passphrase: self.storage_passphrase.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn load_json(json: &str) -> WalletResult<CoreConfig> {
        CoreConfig::from_source(File::from_str(json, FileFormat::Json))
    }

    #[test]
    fn test_defaults() {
        let config = load_json("{}").expect("defaults should load");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.tenant, "default");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.refresh_interval(), None);
        assert_eq!(config.storage_passphrase, None);
    }

    #[test]
    fn test_overrides_and_normalization() {
        let config = load_json(
            r#"{"base_url": "http://localhost:8443/fineract-provider/api/v1",
                "tenant": "demo", "refresh_interval_secs": 15}"#,
        )
        .expect("overrides should load");

        assert_eq!(config.base_url, "http://localhost:8443/fineract-provider/api/v1/");
        assert_eq!(config.tenant, "demo");
        assert_eq!(config.refresh_interval(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            load_json(r#"{"base_url": "ftp://example.com"}"#),
            Err(WalletError::Config(_))
        ));
        assert!(matches!(load_json(r#"{"base_url": "not a url"}"#), Err(WalletError::Config(_))));
        assert!(matches!(load_json(r#"{"tenant": " "}"#), Err(WalletError::Config(_))));
        assert!(matches!(load_json(r#"{"request_timeout_secs": 0}"#), Err(WalletError::Config(_))));
    }

    #[test]
    fn test_redacted_hides_passphrase() {
        let config = CoreConfig {
            storage_passphrase: Some("hunter22".to_string()),
            ..CoreConfig::default()
        };
        let redacted = config.redacted();
        assert_eq!(redacted.storage_passphrase.as_deref(), Some("********"));
        assert_eq!(redacted.base_url, config.base_url);
    }

    #[test]
    fn test_storage_dir_override() {
        let config = CoreConfig {
            storage_dir: Some(PathBuf::from("/tmp/wallet")),
            ..CoreConfig::default()
        };
        assert_eq!(config.resolved_storage_dir(), PathBuf::from("/tmp/wallet"));
    }
}
