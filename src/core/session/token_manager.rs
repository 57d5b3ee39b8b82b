use std::sync::Arc;

use log::{debug, warn};

use super::key_value_store::KeyValueStore;

pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Owner of the single session token of this device.
#[derive(Clone)]
pub struct TokenManager {
    store: Arc<dyn KeyValueStore>,
}

impl TokenManager {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn save_token(&self, token: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.store.put(AUTH_TOKEN_KEY, token.to_string()).await?;
        debug!("token saved");
        Ok(())
    }

    pub async fn get_token(&self) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        let token = self.store.get(AUTH_TOKEN_KEY).await?;
        debug!(
            "token retrieved: {}",
            if token.is_some() { "[PRESENT]" } else { "[ABSENT]" }
        );
        Ok(token)
    }

    /// Removes the token; succeeds when no token is stored.
    pub async fn clear_token(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.store.remove(AUTH_TOKEN_KEY).await?;
        debug!("token cleared");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> bool {
        match self.get_token().await {
            Ok(token) => token.is_some(),
            Err(e) => {
                warn!("cannot read token, assuming anonymous: {e}");
                false
            }
        }
    }
}
