//! Login orchestration
//!
//! Authenticate, persist the token, fetch the first client and persist
//! its details. Each failure maps to one user-facing error; see
//! `LoginUseCase::execute` for the precedence.

use crate::domain::entities::{ClientInfo, UserInfo};
use crate::domain::repositories::{AuthenticationRepository, ClientRepository, SessionStore};
use crate::shared::data_state::{observe_once, DataStateStream};
use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;
use std::sync::Arc;
use tokio::runtime::Handle;
use zeroize::Zeroizing;

/// Progress of a login attempt. `Failed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStep {
    Authenticating,
    ValidatingClients,
    PersistingSession,
    FetchingClientDetails,
    PersistingClientInfo,
    Done,
    Failed,
}

#[derive(Clone)]
pub struct LoginUseCase {
    authentication: Arc<dyn AuthenticationRepository>,
    clients: Arc<dyn ClientRepository>,
    session: Arc<dyn SessionStore>,
    runtime: Handle,
}

impl LoginUseCase {
    /// `runtime` is where the attempt runs; it is independent of the
    /// caller's task.
    pub fn new(
        authentication: Arc<dyn AuthenticationRepository>,
        clients: Arc<dyn ClientRepository>,
        session: Arc<dyn SessionStore>,
        runtime: Handle,
    ) -> Self {
        Self {
            authentication,
            clients,
            session,
            runtime,
        }
    }

    /// Run a login attempt to its terminal state.
    ///
    /// Errors, in order of precedence:
    /// - `InvalidCredentials` when authentication fails for any reason
    /// - `NoClientsFound` when the user has no clients; the session is not touched
    /// - `SomethingWentWrong` when the token cannot be stored
    /// - `ClientFetchFailed` when the client cannot be fetched; the session is
    ///   logged out first
    /// - `SomethingWentWrong` when client or user info cannot be stored
    ///
    /// Dropping the returned future does not abort the attempt.
    pub async fn execute(&self, username: &str, password: &str) -> WalletResult<UserInfo> {
        let flow = LoginFlow {
            authentication: self.authentication.clone(),
            clients: self.clients.clone(),
            session: self.session.clone(),
            step: LoginStep::Authenticating,
        };
        let username = username.to_string();
        let password = Zeroizing::new(password.to_string());

        self.runtime
            .spawn(async move { flow.run(&username, &password).await })
            .await?
    }

    /// `Loading`, then the terminal state of one login attempt
    pub fn stream(&self, username: &str, password: &str) -> DataStateStream<UserInfo> {
        let this = self.clone();
        let username = username.to_string();
        let password = Zeroizing::new(password.to_string());
        observe_once(move || async move { this.execute(&username, &password).await })
    }
}

struct LoginFlow {
    authentication: Arc<dyn AuthenticationRepository>,
    clients: Arc<dyn ClientRepository>,
    session: Arc<dyn SessionStore>,
    step: LoginStep,
}

impl LoginFlow {
    fn enter(&mut self, next: LoginStep) {
        log::debug!("Login {:?} -> {:?}", self.step, next);
        self.step = next;
    }

    async fn run(mut self, username: &str, password: &str) -> WalletResult<UserInfo> {
        let result = self.steps(username, password).await;
        match &result {
            Ok(info) => {
                self.enter(LoginStep::Done);
                log::info!("Logged in as {}", info.username);
            }
            Err(e) => {
                self.enter(LoginStep::Failed);
                log::info!("Login failed: {}", e);
            }
        }
        result
    }

    async fn steps(&mut self, username: &str, password: &str) -> WalletResult<UserInfo> {
        let user_info = self
            .authentication
            .authenticate(username, password)
            .await
            .map_err(|e| {
                log::debug!("Authentication rejected: {}", e);
                WalletError::InvalidCredentials
            })?;

        self.enter(LoginStep::ValidatingClients);
        let client_id = user_info.primary_client().ok_or(WalletError::NoClientsFound)?;
        if user_info.clients.len() > 1 {
            log::debug!("User has {} clients, using {}", user_info.clients.len(), client_id);
        }

        self.enter(LoginStep::PersistingSession);
        self.session
            .update_token(&user_info.base64_encoded_authentication_key)
            .await
            .map_err(persist_failed)?;

        self.enter(LoginStep::FetchingClientDetails);
        let client = match self.clients.get_client(client_id).await {
            Ok(client) => client,
            Err(e) => {
                log::warn!("Failed to fetch client {}: {}", client_id, e);
                if let Err(e) = self.session.log_out().await {
                    log::warn!("Failed to clear session after login failure: {}", e);
                }
                return Err(WalletError::ClientFetchFailed);
            }
        };

        self.enter(LoginStep::PersistingClientInfo);
        self.session
            .update_client_info(&ClientInfo::from(client))
            .await
            .map_err(persist_failed)?;
        self.session.update_user_info(&user_info).await.map_err(persist_failed)?;

        Ok(user_info)
    }
}

fn persist_failed(err: WalletError) -> WalletError {
    log::warn!("Failed to persist session: {}", err);
    WalletError::SomethingWentWrong
}
