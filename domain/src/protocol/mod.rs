//! Backend wire contract.
//!
//! - [`payload`]: request and reply payloads shared by all transports
//! - [`parsing`]: classification of submit and status-check responses

pub mod parsing;
pub mod payload;
