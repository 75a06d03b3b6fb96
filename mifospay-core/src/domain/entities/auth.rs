//! Authentication entities
//!
//! `UserInfo` is the session identity returned by the backend after a
//! successful login. The authentication key is opaque to this crate.

use crate::shared::types::{ClientId, OfficeId, UserId};
use crate::shared::utils::mask;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials sent to the authentication endpoint
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticationPayload {
    pub username: String,
    pub password: String,
}

impl AuthenticationPayload {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Basic` authorization key for these credentials, in the form the
    /// backend returns in `base64EncodedAuthenticationKey`
    pub fn basic_key(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.username, self.password))
    }
}

impl fmt::Debug for AuthenticationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationPayload")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoleInfo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Session identity
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub username: String,
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub base64_encoded_authentication_key: String,
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub office_id: OfficeId,
    #[serde(default)]
    pub office_name: String,
    #[serde(default)]
    pub roles: Vec<RoleInfo>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub clients: Vec<ClientId>,
    #[serde(default)]
    pub should_renew_password: bool,
    #[serde(default)]
    pub is_two_factor_authentication_required: bool,
}

impl UserInfo {
    /// First associated client. Multi-client users are not disambiguated.
    pub fn primary_client(&self) -> Option<ClientId> {
        self.clients.first().copied()
    }

    pub fn has_clients(&self) -> bool {
        !self.clients.is_empty()
    }
}

impl fmt::Debug for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInfo")
            .field("username", &self.username)
            .field("user_id", &self.user_id)
            .field("authentication_key", &mask(&self.base64_encoded_authentication_key))
            .field("authenticated", &self.authenticated)
            .field("office_id", &self.office_id)
            .field("clients", &self.clients)
            .finish()
    }
}
