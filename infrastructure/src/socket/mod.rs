//! WebSocket push transport.
//!
//! The client emits `send_message` events and the server pushes
//! `receive_reply` events, each framed as `{"event": ..., "data": ...}`.

mod frame;
mod transport;

pub use frame::{RECEIVE_REPLY_EVENT, SEND_MESSAGE_EVENT, SocketFrame};
pub use transport::SocketTransport;
