use std::sync::Arc;

use log::{debug, error, info};
use serde::Serialize;

use crate::features::auth::{
    models::{Credentials, UserInfo},
    LoginRepository,
};

use super::{
    common::{ErrorKind, Outcome},
    telemetry::{TelemetryEvent, TelemetrySink},
};

pub mod authentication_handler;
pub mod key_value_store;
pub mod token_manager;


pub use authentication_handler::AuthenticationHandler;
pub use key_value_store::{FileSystemStore, KeyValueStore, MemoryStore};
pub use token_manager::TokenManager;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// a token is stored
    Authenticated,
    Anonymous,
}

/// Moves the device between the anonymous and authenticated states.
#[derive(Clone)]
pub struct SessionManager {
    login_repository: LoginRepository,
    tokens: TokenManager,
    telemetry: Arc<dyn TelemetrySink>,
}

impl SessionManager {
    pub fn new(
        login_repository: LoginRepository,
        tokens: TokenManager,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        Self {
            login_repository,
            tokens,
            telemetry,
        }
    }

    pub async fn state(&self) -> SessionState {
        if self.tokens.is_authenticated().await {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// Logs in and stores the returned token, replacing any previous one.
    pub async fn login(&self, credentials: Credentials) -> Outcome<UserInfo> {
        debug!("login in");

        let username = credentials.username.clone();

        let response = match self.login_repository.login(credentials).await {
            Outcome::Success(r) => r,
            Outcome::Failure(kind) => {
                self.telemetry.record(TelemetryEvent::LoginFailed { kind });
                return Outcome::Failure(kind);
            }
        };

        if let Err(e) = self.tokens.save_token(&response.token).await {
            error!("cannot store session token: {e}");
            self.telemetry.record(TelemetryEvent::LoginFailed {
                kind: ErrorKind::Storage,
            });
            return Outcome::Failure(ErrorKind::Storage);
        }

        info!("logged in as {username}");
        self.telemetry
            .record(TelemetryEvent::LoginSucceeded { username });

        Outcome::Success(response.user)
    }

    /// Clears the stored token. Logging out while anonymous succeeds as well.
    pub async fn logout(&self) -> Outcome<()> {
        info!("logout initiated");

        if let Err(e) = self.tokens.clear_token().await {
            error!("cannot clear session token: {e}");
            return Outcome::Failure(ErrorKind::Storage);
        }

        self.telemetry.record(TelemetryEvent::LoggedOut);
        info!("token cleared, logout complete");

        Outcome::Success(())
    }
}
