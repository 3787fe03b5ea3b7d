//! Socket transport implementation

use super::frame::SocketFrame;
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use parley_application::{ChatTransport, TransportError};
use parley_domain::{SubmitOutcome, TransportKind};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, info, warn};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Transport over a WebSocket event channel.
///
/// Connects lazily on the first message and reconnects after the server
/// closes the channel. `submit` emits `send_message` and waits for the next
/// `receive_reply` event.
pub struct SocketTransport {
    url: String,
    reply_timeout: Option<Duration>,
    stream: Mutex<Option<WsStream>>,
}

impl SocketTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reply_timeout: None,
            stream: Mutex::new(None),
        }
    }

    /// Give up on a reply after `timeout`.
    pub fn with_reply_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.reply_timeout = timeout;
        self
    }

    async fn connect(&self) -> Result<WsStream, TransportError> {
        let (stream, _) = connect_async(self.url.as_str())
            .await
            .map_err(|e| TransportError::ConnectionError(e.to_string()))?;
        info!("Connected to {}", self.url);
        Ok(stream)
    }

    async fn next_reply(stream: &mut WsStream) -> Result<SubmitOutcome, TransportError> {
        while let Some(frame) = stream.next().await {
            let frame = frame.map_err(|e| TransportError::RequestFailed(e.to_string()))?;
            let text = match frame {
                WsMessage::Text(text) => text,
                WsMessage::Close(close) => {
                    debug!("Server closed the channel: {:?}", close);
                    return Err(TransportError::TransportClosed);
                }
                _ => continue,
            };

            let frame = match SocketFrame::parse(&text) {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("Ignoring unreadable frame: {}", e);
                    continue;
                }
            };

            match frame.reply() {
                Some(Ok(reply)) => return Ok(SubmitOutcome::Immediate(reply)),
                Some(Err(e)) => return Err(TransportError::InvalidResponse(e.to_string())),
                None => debug!("Ignoring '{}' event", frame.event),
            }
        }
        Err(TransportError::TransportClosed)
    }
}

#[async_trait]
impl ChatTransport for SocketTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Socket
    }

    async fn submit(&self, message: &str) -> Result<SubmitOutcome, TransportError> {
        let mut guard = self.stream.lock().await;
        // Out of the slot until its reply is read; an abandoned exchange
        // takes the connection with it.
        let mut stream = match guard.take() {
            Some(stream) => stream,
            None => self.connect().await?,
        };

        let frame = SocketFrame::send_message(message);
        stream
            .send(WsMessage::Text(frame.encode()))
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        let result = match self.reply_timeout {
            Some(timeout) => tokio::time::timeout(timeout, Self::next_reply(&mut stream))
                .await
                .unwrap_or(Err(TransportError::Timeout)),
            None => Self::next_reply(&mut stream).await,
        };

        match &result {
            Ok(_) | Err(TransportError::InvalidResponse(_)) => *guard = Some(stream),
            Err(e) => debug!("Dropping connection to {}: {}", self.url, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    /// Accept one connection and answer each `send_message` with a typing
    /// event followed by a reply echoing the message.
    async fn echo_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
            while let Some(Ok(WsMessage::Text(text))) = ws.next().await {
                let frame = SocketFrame::parse(&text).unwrap();
                let message = frame.data["message"].as_str().unwrap_or_default().to_string();
                let typing = serde_json::json!({"event": "typing"}).to_string();
                let reply = serde_json::json!({
                    "event": "receive_reply",
                    "data": {"reply": format!("echo: {}", message), "quick_replies": ["again"]}
                })
                .to_string();
                ws.send(WsMessage::Text(typing)).await.unwrap();
                ws.send(WsMessage::Text(reply)).await.unwrap();
            }
        });

        format!("ws://{}", addr)
    }

    #[tokio::test]
    async fn test_submit_waits_for_receive_reply() {
        let url = echo_server().await;
        let transport = SocketTransport::new(url);

        for text in ["hello", "second"] {
            match transport.submit(text).await.unwrap() {
                SubmitOutcome::Immediate(reply) => {
                    assert_eq!(reply.text(), Some(format!("echo: {}", text).as_str()));
                    assert_eq!(reply.quick_replies.labels(), &["again"]);
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    /// Accept connections until the test ends. The reply to "slow" arrives
    /// after `delay`; every other message is answered at once.
    async fn delayed_server(delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
                    while let Some(Ok(WsMessage::Text(text))) = ws.next().await {
                        let frame = SocketFrame::parse(&text).unwrap();
                        let message = frame.data["message"].as_str().unwrap_or_default().to_string();
                        if message == "slow" {
                            tokio::time::sleep(delay).await;
                        }
                        let reply = serde_json::json!({
                            "event": "receive_reply",
                            "data": {"reply": format!("answer to {}", message)}
                        })
                        .to_string();
                        if ws.send(WsMessage::Text(reply)).await.is_err() {
                            break;
                        }
                    }
                });
            }
        });

        format!("ws://{}", addr)
    }

    #[tokio::test]
    async fn test_late_reply_is_not_given_to_next_message() {
        let url = delayed_server(Duration::from_millis(300)).await;
        let transport =
            SocketTransport::new(url).with_reply_timeout(Some(Duration::from_millis(100)));

        let err = transport.submit("slow").await.unwrap_err();
        assert!(matches!(err, TransportError::Timeout));

        // Outlive the late reply so it would be queued on a reused stream
        tokio::time::sleep(Duration::from_millis(300)).await;

        match transport.submit("second").await.unwrap() {
            SubmitOutcome::Immediate(reply) => {
                assert_eq!(reply.text(), Some("answer to second"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dropped_submit_is_not_given_to_next_message() {
        let url = delayed_server(Duration::from_millis(200)).await;
        let transport = SocketTransport::new(url);

        let abandoned =
            tokio::time::timeout(Duration::from_millis(50), transport.submit("slow")).await;
        assert!(abandoned.is_err());
        tokio::time::sleep(Duration::from_millis(250)).await;

        match transport.submit("next").await.unwrap() {
            SubmitOutcome::Immediate(reply) => {
                assert_eq!(reply.text(), Some("answer to next"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = SocketTransport::new(format!("ws://{}", addr));
        let err = transport.submit("hi").await.unwrap_err();
        assert!(matches!(err, TransportError::ConnectionError(_)));
    }

    #[tokio::test]
    async fn test_server_close_is_transport_closed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
            let _ = ws.next().await;
            let _ = ws.close(None).await;
        });

        let transport = SocketTransport::new(format!("ws://{}", addr));
        let err = transport.submit("hi").await.unwrap_err();
        assert!(matches!(err, TransportError::TransportClosed));
    }
}
