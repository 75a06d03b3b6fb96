//! Error handling for the wallet core
//!
//! This module defines the error types used throughout the wallet core.
//! Transport and remote failures come from the repositories, business-rule
//! and persistence failures are raised by the use cases.

use thiserror::Error;

/// Message surfaced for every failed authentication attempt.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
/// Message surfaced when an authenticated user has no clients.
pub const NO_CLIENTS_FOUND: &str = "No clients found";
/// Message surfaced when session state could not be written.
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";
/// Message surfaced when the client details could not be fetched after login.
pub const CLIENT_FETCH_FAILED: &str = "Failed to fetch client details";

/// Wallet error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{}", INVALID_CREDENTIALS)]
    InvalidCredentials,

    #[error("{}", NO_CLIENTS_FOUND)]
    NoClientsFound,

    #[error("{}", SOMETHING_WENT_WRONG)]
    SomethingWentWrong,

    #[error("{}", CLIENT_FETCH_FAILED)]
    ClientFetchFailed,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create an API error from a non-success HTTP status
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a cryptographic error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error came from the transport or the remote backend.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Api { .. } | Self::NotFound(_))
    }

    /// Whether the error is one of the messages shown to the user by the
    /// login flow.
    pub fn is_login_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials
                | Self::NoClientsFound
                | Self::SomethingWentWrong
                | Self::ClientFetchFailed
        )
    }
}

// Standard library error conversions
impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(format!("IO error: {}", err))
    }
}

impl From<hex::FromHexError> for WalletError {
    fn from(err: hex::FromHexError) -> Self {
        Self::validation(format!("Hex decoding error: {}", err))
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<base64::DecodeError> for WalletError {
    fn from(err: base64::DecodeError) -> Self {
        Self::serialization(format!("Base64 error: {}", err))
    }
}

impl From<tokio::task::JoinError> for WalletError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Task join error: {}", err))
    }
}

// Network error conversions
impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::serialization(format!("Invalid response body: {}", err));
        }
        match err.status() {
            Some(status) => Self::api(status.as_u16(), err.to_string()),
            None => Self::network(err.to_string()),
        }
    }
}

impl From<url::ParseError> for WalletError {
    fn from(err: url::ParseError) -> Self {
        Self::config(format!("Invalid URL: {}", err))
    }
}

impl From<config::ConfigError> for WalletError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

// Cryptographic error conversions
impl From<argon2::password_hash::Error> for WalletError {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::crypto(format!("Password hash error: {}", err))
    }
}

impl From<argon2::Error> for WalletError {
    fn from(err: argon2::Error) -> Self {
        Self::crypto(format!("Argon2 error: {}", err))
    }
}

impl From<aes_gcm::Error> for WalletError {
    fn from(err: aes_gcm::Error) -> Self {
        Self::crypto(format!("AES-GCM error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_creation() {
        let config_error = WalletError::config("Invalid configuration");
        let api_error = WalletError::api(404, "Client not found");
        let validation_error = WalletError::validation("Invalid input");

        assert!(matches!(config_error, WalletError::Config(_)));
        assert!(matches!(api_error, WalletError::Api { status: 404, .. }));
        assert!(matches!(validation_error, WalletError::Validation(_)));
    }

    #[test]
    fn test_error_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let wallet_error: WalletError = io_error.into();

        assert!(matches!(wallet_error, WalletError::Storage(_)));
    }

    #[test]
    fn test_login_messages_are_fixed() {
        assert_eq!(WalletError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(WalletError::NoClientsFound.to_string(), "No clients found");
        assert_eq!(WalletError::SomethingWentWrong.to_string(), "Something went wrong");
        assert!(WalletError::ClientFetchFailed.is_login_failure());
        assert!(!WalletError::network("timeout").is_login_failure());
    }

    #[test]
    fn test_remote_classification() {
        assert!(WalletError::network("connection refused").is_remote());
        assert!(WalletError::api(500, "boom").is_remote());
        assert!(!WalletError::storage("disk full").is_remote());
    }

    #[test]
    fn test_error_display() {
        let error = WalletError::api(401, "Unauthorized");
        let display = format!("{}", error);

        assert!(display.contains("API error"));
        assert!(display.contains("401"));
    }
}
