use log::{info, warn};
use mockall::automock;

use super::common::ErrorKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TelemetryEvent {
    LoginSucceeded { username: String },
    LoginFailed { kind: ErrorKind },
    LoggedOut,
    SessionExpired,
}

/// Crash and analytics reporting capability.
#[automock]
pub trait TelemetrySink: Send + Sync {
    fn record(&self, event: TelemetryEvent);
}

/// Reports events through the application log, tagged with the device name.
pub struct LogTelemetrySink {
    device: String,
}

impl LogTelemetrySink {
    pub fn new() -> Self {
        let device = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "unknown".to_string());

        Self { device }
    }

    pub fn device(&self) -> &str {
        &self.device
    }
}

impl Default for LogTelemetrySink {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetrySink for LogTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        match event {
            TelemetryEvent::LoginSucceeded { username } => {
                info!("[{}] login succeeded for {username}", self.device)
            }
            TelemetryEvent::LoginFailed { kind } => {
                warn!("[{}] login failed: {kind}", self.device)
            }
            TelemetryEvent::LoggedOut => info!("[{}] logged out", self.device),
            TelemetryEvent::SessionExpired => warn!("[{}] session expired", self.device),
        }
    }
}
