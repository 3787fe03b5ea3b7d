//! Shared HTTP plumbing

use parley_application::TransportError;
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = concat!("parley/", env!("CARGO_PKG_VERSION"));

/// Base URL of the chatbot backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendEndpoint {
    base_url: String,
}

impl BackendEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` (with or without a leading slash).
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Build the client used by the HTTP transports.
///
/// Keeps cookies; `timeout` bounds each request.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, TransportError> {
    let mut builder = reqwest::Client::builder()
        .cookie_store(true)
        .user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| TransportError::ConnectionError(e.to_string()))
}

pub(crate) fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::ConnectionError(error.to_string())
    } else if error.is_decode() {
        TransportError::InvalidResponse(error.to_string())
    } else {
        TransportError::RequestFailed(error.to_string())
    }
}

/// Check the status code and decode the JSON body.
pub(crate) async fn read_json(response: reqwest::Response) -> Result<Value, TransportError> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::RequestFailed(format!(
            "HTTP error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }
    response.json::<Value>().await.map_err(map_reqwest_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let endpoint = BackendEndpoint::new("http://localhost:5000/");
        assert_eq!(endpoint.base_url(), "http://localhost:5000");
        assert_eq!(
            endpoint.url("/send_message"),
            "http://localhost:5000/send_message"
        );
        assert_eq!(endpoint.url("chatbot"), "http://localhost:5000/chatbot");
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let endpoint = BackendEndpoint::new("https://example.com/bot");
        assert_eq!(
            endpoint.url("/check_response"),
            "https://example.com/bot/check_response"
        );
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(Some(Duration::from_secs(5))).is_ok());
        assert!(build_client(None).is_ok());
    }
}
