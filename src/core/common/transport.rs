use std::fmt::Display;

use log::debug;
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};

use super::error_mapper::{map_error, map_transport_error};

/// Closed set of failure categories surfaced to callers.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// transport unreachable, connection refused or timed out
    NetworkError,
    Unauthorized,
    Forbidden,
    NotFound,
    InvalidRequest,
    /// any other 4xx
    ClientError,
    ServerError,
    /// payload shape did not match the expected record
    Deserialization,
    /// the in-flight request was abandoned by its caller
    Cancelled,
    /// the local token store failed
    Storage,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ErrorKind::NetworkError => "network error",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not found",
            ErrorKind::InvalidRequest => "invalid request",
            ErrorKind::ClientError => "client error",
            ErrorKind::ServerError => "server error",
            ErrorKind::Deserialization => "deserialization error",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::Storage => "storage error",
        };
        write!(f, "{text}")
    }
}

/// Error raised by the endpoint layer, caught at the repository boundary.
#[derive(Debug)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub detail: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, detail: String) -> Self {
        Self {
            kind,
            status: None,
            detail,
        }
    }

    pub fn from_status(status: u16, detail: String) -> Self {
        Self {
            kind: map_error(status),
            status: Some(status),
            detail,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (HTTP {}): {}", self.kind, status, self.detail),
            None => write!(f, "{}: {}", self.kind, self.detail),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            kind: map_transport_error(&e),
            status: e.status().map(|s| s.as_u16()),
            detail: e.to_string(),
        }
    }
}

/// Sends the request and decodes a successful body into `T`.
pub async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let body = send(request).await?;

    serde_json::from_str::<T>(&body)
        .map_err(|e| ApiError::new(ErrorKind::Deserialization, e.to_string()))
}

/// Sends the request, discarding a successful body.
pub async fn execute(request: RequestBuilder) -> Result<(), ApiError> {
    send(request).await.map(|_| ())
}

async fn send(request: RequestBuilder) -> Result<String, ApiError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        debug!("{url} answered {status}");
        return Err(ApiError::from_status(status.as_u16(), body));
    }

    Ok(response.text().await?)
}
