//! Form POST transport: `POST /send_message`, reply in the response.

use super::client::{BackendEndpoint, map_reqwest_error, read_json};
use async_trait::async_trait;
use parley_application::{ChatTransport, TransportError};
use parley_domain::{OutgoingMessage, SubmitOutcome, TransportKind, parse_reply};
use tracing::debug;

/// Path of the form endpoint
pub const SEND_MESSAGE_PATH: &str = "/send_message";

/// Transport for backends that answer every message inline.
pub struct FormTransport {
    client: reqwest::Client,
    endpoint: BackendEndpoint,
}

impl FormTransport {
    pub fn new(client: reqwest::Client, endpoint: BackendEndpoint) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl ChatTransport for FormTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Form
    }

    async fn submit(&self, message: &str) -> Result<SubmitOutcome, TransportError> {
        let url = self.endpoint.url(SEND_MESSAGE_PATH);
        debug!("POST {} (form)", url);

        let response = self
            .client
            .post(&url)
            .form(&OutgoingMessage::new(message))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body = read_json(response).await?;
        let reply =
            parse_reply(&body).map_err(|e| TransportError::InvalidResponse(e.to_string()))?;
        Ok(SubmitOutcome::Immediate(reply))
    }
}
