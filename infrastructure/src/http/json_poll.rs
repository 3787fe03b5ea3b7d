//! JSON POST transport with polling for deferred replies.
//!
//! `POST /chatbot` answers either with the reply or with
//! `{"status": "pending", "user_id": ...}`; the latter is then checked via
//! `GET /check_response?user_id=...`.

use super::client::{BackendEndpoint, map_reqwest_error, read_json};
use async_trait::async_trait;
use parley_application::{ChatTransport, TransportError};
use parley_domain::{
    OutgoingMessage, PollResult, SubmitOutcome, TransportKind, parse_poll_response,
    parse_submit_response,
};
use tracing::debug;

/// Path of the submit endpoint
pub const CHATBOT_PATH: &str = "/chatbot";
/// Path of the status endpoint
pub const CHECK_RESPONSE_PATH: &str = "/check_response";

/// Transport for backends that may defer their reply.
pub struct JsonPollTransport {
    client: reqwest::Client,
    endpoint: BackendEndpoint,
}

impl JsonPollTransport {
    pub fn new(client: reqwest::Client, endpoint: BackendEndpoint) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl ChatTransport for JsonPollTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::JsonPoll
    }

    async fn submit(&self, message: &str) -> Result<SubmitOutcome, TransportError> {
        let url = self.endpoint.url(CHATBOT_PATH);
        debug!("POST {} (json)", url);

        let response = self
            .client
            .post(&url)
            .json(&OutgoingMessage::new(message))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body = read_json(response).await?;
        parse_submit_response(&body).map_err(|e| TransportError::InvalidResponse(e.to_string()))
    }

    async fn check_status(&self, user_id: &str) -> Result<PollResult, TransportError> {
        let url = self.endpoint.url(CHECK_RESPONSE_PATH);
        debug!("GET {}?user_id={}", url, user_id);

        let response = self
            .client
            .get(&url)
            .query(&[("user_id", user_id)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body = read_json(response).await?;
        parse_poll_response(&body).map_err(|e| TransportError::InvalidResponse(e.to_string()))
    }
}
