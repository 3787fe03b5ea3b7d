//! Response classification
//!
//! The submit endpoint of the polling backend answers with either a reply
//! or `{"status": "pending", "user_id": ...}`; the status endpoint answers
//! with `completed`, `error` or `pending`. These helpers turn the raw JSON
//! into [`SubmitOutcome`] and [`PollResult`].

use super::payload::{BotReply, PollResult, SubmitOutcome};
use crate::core::error::DomainError;
use serde_json::Value;

/// Default text when an `error` status carries no `error_message`.
pub const UNKNOWN_BACKEND_ERROR: &str = "unknown backend error";

fn status_of(value: &Value) -> Option<&str> {
    value.get("status").and_then(Value::as_str)
}

/// Parse a reply object (`reply`/`response` + `quick_replies`).
pub fn parse_reply(value: &Value) -> Result<BotReply, DomainError> {
    if !value.is_object() {
        return Err(DomainError::MalformedPayload(format!(
            "expected a JSON object, got {}",
            value
        )));
    }
    serde_json::from_value(value.clone()).map_err(|e| DomainError::MalformedPayload(e.to_string()))
}

/// Classify the response to a submitted message.
pub fn parse_submit_response(value: &Value) -> Result<SubmitOutcome, DomainError> {
    if status_of(value) == Some("pending") {
        let user_id = value
            .get("user_id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                DomainError::MalformedPayload("pending response without user_id".to_string())
            })?;
        return Ok(SubmitOutcome::Deferred {
            user_id: user_id.to_string(),
        });
    }
    parse_reply(value).map(SubmitOutcome::Immediate)
}

/// Classify a status-check response.
///
/// Any status other than `completed` or `error` (including a missing one)
/// counts as still pending.
pub fn parse_poll_response(value: &Value) -> Result<PollResult, DomainError> {
    match status_of(value) {
        Some("completed") => parse_reply(value).map(PollResult::Completed),
        Some("error") => {
            let message = value
                .get("error_message")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_BACKEND_ERROR);
            Ok(PollResult::Error(message.to_string()))
        }
        _ => Ok(PollResult::Pending),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quick_reply::set::QuickReplySet;
    use serde_json::json;

    #[test]
    fn test_submit_immediate_reply() {
        let outcome =
            parse_submit_response(&json!({"reply": "hi", "quick_replies": ["A", "B"]})).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Immediate(BotReply::new("hi", QuickReplySet::new(["A", "B"])))
        );
    }

    #[test]
    fn test_submit_deferred() {
        let outcome =
            parse_submit_response(&json!({"status": "pending", "user_id": "u-42"})).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Deferred {
                user_id: "u-42".to_string()
            }
        );
    }

    #[test]
    fn test_submit_deferred_without_user_id_is_malformed() {
        let err = parse_submit_response(&json!({"status": "pending"})).unwrap_err();
        assert!(matches!(err, DomainError::MalformedPayload(_)));
    }

    #[test]
    fn test_submit_non_object_is_malformed() {
        assert!(parse_submit_response(&json!(["hi"])).is_err());
    }

    #[test]
    fn test_poll_completed_uses_response_field() {
        let result = parse_poll_response(&json!({"status": "completed", "response": "done"}))
            .unwrap();
        match result {
            PollResult::Completed(reply) => assert_eq!(reply.text(), Some("done")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_poll_error_message() {
        let result =
            parse_poll_response(&json!({"status": "error", "error_message": "boom"})).unwrap();
        assert_eq!(result, PollResult::Error("boom".to_string()));

        let result = parse_poll_response(&json!({"status": "error"})).unwrap();
        assert_eq!(result, PollResult::Error(UNKNOWN_BACKEND_ERROR.to_string()));
    }

    #[test]
    fn test_poll_unknown_status_is_pending() {
        assert_eq!(
            parse_poll_response(&json!({"status": "queued"})).unwrap(),
            PollResult::Pending
        );
        assert_eq!(parse_poll_response(&json!({})).unwrap(), PollResult::Pending);
    }
}
