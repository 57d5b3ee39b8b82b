use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, Method, RequestBuilder};

use crate::core::session::TokenManager;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// HTTP transport bound to one base endpoint.
///
/// Holds no per-call state: each request reads the current session token
/// from the token manager when it is built.
#[derive(Clone)]
pub struct HttpClientFactory {
    pub api_url: String,
    client: Client,
    tokens: TokenManager,
}

impl HttpClientFactory {
    /// Creates a factory whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Fails when the underlying client cannot be built (TLS backend initialization).
    pub fn new(
        api_url: &str,
        timeout: Duration,
        tokens: TokenManager,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        debug!("creating HTTP client for {api_url}");

        let client = reqwest::ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(APP_USER_AGENT)
            .build()?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            client,
            tokens,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Builds a request to `{api_url}/{path}`, authenticated when a token is stored.
    pub async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let builder = self.client.request(method, &url);

        match self.tokens.get_token().await {
            Ok(Some(token)) => {
                debug!("auth header added to request: {url}");
                builder.bearer_auth(token)
            }
            Ok(None) => {
                debug!("no token available for request: {url}");
                builder
            }
            Err(e) => {
                warn!("cannot read session token, sending {url} anonymously: {e}");
                builder
            }
        }
    }

    pub async fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path).await
    }

    pub async fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path).await
    }

    pub async fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path).await
    }
}
