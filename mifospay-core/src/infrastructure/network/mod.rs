//! Fineract HTTP client
//!
//! `ApiClient` implements every remote repository trait. Each request
//! carries the tenant header, a correlation id and, once a session token
//! is stored, the `Basic` authorization header. Non-success responses are
//! turned into `WalletError::Api` (or `NotFound` for 404) carrying the
//! backend's user-facing message.

use crate::domain::entities::CommandResponse;
use crate::domain::repositories::SessionStore;
use crate::shared::config::CoreConfig;
use crate::shared::constants::{AUTH_SCHEME_BASIC, HEADER_REQUEST_ID, HEADER_TENANT};
use crate::shared::data_state::{observe, DataStateStream};
use crate::shared::error::WalletError;
use crate::shared::types::{ConfirmationToken, WalletResult};
use crate::shared::utils::generate_id;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub mod accounts;
pub mod authentication;
pub mod clients;
pub mod kyc;
pub mod saved_cards;
pub mod search;
pub mod standing_instructions;

#[cfg(test)]
pub(crate) mod test_server;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    tenant: String,
    refresh_interval: Option<Duration>,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: &CoreConfig, session: Arc<dyn SessionStore>) -> WalletResult<Self> {
        let config = config.clone().validated()?;
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()
            .map_err(|e| WalletError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: Url::parse(&config.base_url)?,
            tenant: config.tenant.clone(),
            refresh_interval: config.refresh_interval(),
            session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Resolve a relative endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> WalletResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        authenticated: bool,
    ) -> WalletResult<RequestBuilder> {
        let url = self.endpoint(path)?;
        let request_id = generate_id();
        log::debug!("{} {} [{}]", method, url.path(), request_id);

        let mut builder = self
            .http
            .request(method, url)
            .header(HEADER_TENANT, &self.tenant)
            .header(HEADER_REQUEST_ID, request_id)
            .header(ACCEPT, "application/json");

        if authenticated {
            if let Some(key) = self.session.token().await? {
                builder = builder.header(AUTHORIZATION, format!("{} {}", AUTH_SCHEME_BASIC, key));
            }
        }
        Ok(builder)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> WalletResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = error_from_response(status.as_u16(), &body);
            log::warn!("Request failed: {}", err);
            return Err(err);
        }
        Ok(response.json::<T>().await?)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> WalletResult<T> {
        let builder = self.request(Method::GET, path, true).await?.query(query);
        self.send(builder).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> WalletResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path, true).await?.json(body);
        self.send(builder).await
    }

    /// POST without the authorization header
    pub async fn post_anonymous<B, T>(&self, path: &str, body: &B) -> WalletResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path, false).await?.json(body);
        self.send(builder).await
    }

    /// Write and return the confirmation token from the backend acknowledgement
    pub async fn command<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> WalletResult<ConfirmationToken>
    where
        B: Serialize + ?Sized + Sync,
    {
        let mut builder = self.request(method.clone(), path, true).await?.query(query);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response: CommandResponse = self.send(builder).await?;
        let token = response.confirmation_token()?;
        log::info!("{} {} confirmed as {}", method, path, token);
        Ok(token)
    }

    /// Continuous read honoring the configured refresh interval
    pub fn observe<T, F, Fut>(&self, fetch: F) -> DataStateStream<T>
    where
        T: Send + 'static,
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = WalletResult<T>> + Send + 'static,
    {
        observe(self.refresh_interval, fetch)
    }
}

/// Fineract error envelope
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ApiErrorBody {
    default_user_message: Option<String>,
    developer_message: Option<String>,
    errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ApiErrorDetail {
    default_user_message: Option<String>,
}

/// Map a non-success response to an error with the most specific message
pub(crate) fn error_from_response(status: u16, body: &str) -> WalletError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .errors
        .into_iter()
        .find_map(|e| e.default_user_message)
        .or(parsed.default_user_message)
        .or(parsed.developer_message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() || trimmed.starts_with('{') {
                format!("HTTP {}", status)
            } else {
                trimmed.chars().take(200).collect()
            }
        });

    match status {
        404 => WalletError::not_found(message),
        _ => WalletError::api(status, message),
    }
}
