//! HTTP transports.
//!
//! - [`FormTransport`]: `POST /send_message` with a form field, inline reply
//! - [`JsonPollTransport`]: `POST /chatbot` with JSON, inline or deferred
//!   reply, deferred replies polled via `GET /check_response`
//!
//! Both share one cookie-keeping [`reqwest::Client`] so the backend's
//! session cookie (which keys its per-user context) survives across calls.

mod client;
mod form;
mod json_poll;

pub use client::{BackendEndpoint, build_client};
pub use form::FormTransport;
pub use json_poll::JsonPollTransport;

#[cfg(test)]
mod test_server;
