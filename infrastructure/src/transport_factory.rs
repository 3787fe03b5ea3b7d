//! Builds the configured [`ChatTransport`].

use crate::config::FileBackendConfig;
use crate::http::{BackendEndpoint, FormTransport, JsonPollTransport, build_client};
use crate::offline::OfflineResponder;
use crate::socket::SocketTransport;
use parley_application::{ChatTransport, TransportError};
use parley_domain::TransportKind;
use std::sync::Arc;
use tracing::info;

/// Create the transport selected by `backend.transport`.
pub fn build_transport(
    backend: &FileBackendConfig,
) -> Result<Arc<dyn ChatTransport>, TransportError> {
    let timeout = backend.request_timeout();

    let transport: Arc<dyn ChatTransport> = match backend.transport {
        TransportKind::Form => Arc::new(FormTransport::new(
            build_client(timeout)?,
            BackendEndpoint::new(&backend.base_url),
        )),
        TransportKind::JsonPoll => Arc::new(JsonPollTransport::new(
            build_client(timeout)?,
            BackendEndpoint::new(&backend.base_url),
        )),
        TransportKind::Socket => Arc::new(
            SocketTransport::new(backend.resolved_socket_url()).with_reply_timeout(timeout),
        ),
        TransportKind::Offline => {
            let responder = OfflineResponder::new();
            Arc::new(match backend.offline_pending_checks {
                Some(checks) => responder.with_deferred_replies(checks),
                None => responder,
            })
        }
    };

    info!("Using {} transport", transport.kind());
    Ok(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_each_kind() {
        for kind in [
            TransportKind::Form,
            TransportKind::JsonPoll,
            TransportKind::Socket,
            TransportKind::Offline,
        ] {
            let backend = FileBackendConfig {
                transport: kind,
                ..Default::default()
            };
            assert_eq!(build_transport(&backend).unwrap().kind(), kind);
        }
    }

    #[tokio::test]
    async fn test_offline_deferred_setting() {
        let backend = FileBackendConfig {
            transport: TransportKind::Offline,
            offline_pending_checks: Some(0),
            ..Default::default()
        };
        let transport = build_transport(&backend).unwrap();
        assert!(matches!(
            transport.submit("hello").await.unwrap(),
            parley_domain::SubmitOutcome::Deferred { .. }
        ));
    }
}
