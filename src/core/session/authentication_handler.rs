use std::sync::Arc;

use log::{error, warn};
use tokio::sync::broadcast;

use super::token_manager::TokenManager;
use crate::core::{
    common::{ErrorKind, Outcome},
    telemetry::{TelemetryEvent, TelemetrySink},
};

/// Drops the session when the server rejects the stored token.
///
/// Applied by callers to repository outcomes; subscribers are told once per
/// rejected call so they can route back to the login screen.
#[derive(Clone)]
pub struct AuthenticationHandler {
    tokens: TokenManager,
    telemetry: Arc<dyn TelemetrySink>,
    failures: broadcast::Sender<()>,
}

impl AuthenticationHandler {
    pub fn new(tokens: TokenManager, telemetry: Arc<dyn TelemetrySink>) -> Self {
        let (failures, _) = broadcast::channel(16);

        Self {
            tokens,
            telemetry,
            failures,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.failures.subscribe()
    }

    /// Returns `true` when the outcome ended the session.
    pub async fn handle<T>(&self, outcome: &Outcome<T>) -> bool {
        if outcome.failure() != Some(ErrorKind::Unauthorized) {
            return false;
        }

        warn!("authentication failed (401), clearing token");

        if let Err(e) = self.tokens.clear_token().await {
            error!("cannot clear rejected token: {e}");
        }

        self.telemetry.record(TelemetryEvent::SessionExpired);

        // no subscriber is not an error
        let _ = self.failures.send(());

        true
    }
}
