//! Offline responder transport

use super::language::{Language, detect_language, quick_replies_for};
use async_trait::async_trait;
use parley_application::{ChatTransport, TransportError};
use parley_domain::{BotReply, PollResult, QuickReplySet, SubmitOutcome, TransportKind};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

/// Requests allowed per session before the responder refuses.
pub const DEFAULT_REQUEST_BUDGET: u32 = 50;

/// Idle time after which the session context is forgotten.
pub const DEFAULT_CONTEXT_TTL: Duration = Duration::from_secs(60 * 60);

const HOLA_REPLY: &str = "¡Te saluda el Chatbot de PCB! ¿En qué puedo ayudarte?";
const BUDGET_EXCEEDED_REPLY: &str =
    "Has superado el número máximo de solicitudes. Intenta más tarde";

#[derive(Debug)]
struct SessionContext {
    language: Language,
    quick_replies_sent: bool,
    requests: u32,
    last_seen: Instant,
}

#[derive(Debug)]
struct DeferredReply {
    pending_checks: u32,
    reply: BotReply,
}

#[derive(Debug, Default)]
struct ResponderState {
    context: Option<SessionContext>,
    deferred: HashMap<String, DeferredReply>,
    next_id: u64,
}

/// In-process chatbot that answers without a network.
///
/// The first message of a session gets a welcome in the detected language
/// plus three quick replies. Later messages get an echo-style answer; quick
/// replies are attached to the first of those only. After the request
/// budget is spent every answer is a refusal.
///
/// With [`with_deferred_replies`](Self::with_deferred_replies) the responder
/// behaves like a polling backend: submit hands out a user id and the reply
/// becomes available after the given number of pending checks.
pub struct OfflineResponder {
    request_budget: u32,
    context_ttl: Duration,
    pending_checks: Option<u32>,
    state: Mutex<ResponderState>,
}

impl OfflineResponder {
    pub fn new() -> Self {
        Self {
            request_budget: DEFAULT_REQUEST_BUDGET,
            context_ttl: DEFAULT_CONTEXT_TTL,
            pending_checks: None,
            state: Mutex::new(ResponderState::default()),
        }
    }

    pub fn with_request_budget(mut self, budget: u32) -> Self {
        self.request_budget = budget;
        self
    }

    pub fn with_context_ttl(mut self, ttl: Duration) -> Self {
        self.context_ttl = ttl;
        self
    }

    /// Defer every reply; each stays pending for `pending_checks` status checks.
    pub fn with_deferred_replies(mut self, pending_checks: u32) -> Self {
        self.pending_checks = Some(pending_checks);
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ResponderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Compute the reply to one message, updating the session context.
    pub fn respond(&self, message: &str) -> BotReply {
        let mut state = self.lock();
        let now = Instant::now();

        if let Some(context) = &state.context
            && now.duration_since(context.last_seen) > self.context_ttl
        {
            debug!("Offline session context expired");
            state.context = None;
        }

        let Some(context) = state.context.as_mut() else {
            let language = detect_language(message);
            state.context = Some(SessionContext {
                language,
                quick_replies_sent: false,
                requests: 0,
                last_seen: now,
            });
            return BotReply::new(language.welcome(), quick_replies_for(language));
        };
        context.last_seen = now;

        if message.trim().eq_ignore_ascii_case("hola") {
            return BotReply::new(HOLA_REPLY, QuickReplySet::empty());
        }

        context.requests += 1;
        if context.requests > self.request_budget {
            return BotReply::new(BUDGET_EXCEEDED_REPLY, QuickReplySet::empty());
        }

        let quick_replies = if context.quick_replies_sent {
            QuickReplySet::empty()
        } else {
            context.quick_replies_sent = true;
            quick_replies_for(context.language)
        };
        BotReply::new(echo(context.language, message.trim()), quick_replies)
    }
}

impl Default for OfflineResponder {
    fn default() -> Self {
        Self::new()
    }
}

fn echo(language: Language, message: &str) -> String {
    match language {
        Language::Spanish => format!("Recibí tu mensaje: \"{message}\"."),
        Language::English => format!("You said: \"{message}\"."),
    }
}

#[async_trait]
impl ChatTransport for OfflineResponder {
    fn kind(&self) -> TransportKind {
        TransportKind::Offline
    }

    async fn submit(&self, message: &str) -> Result<SubmitOutcome, TransportError> {
        let reply = self.respond(message);
        let Some(pending_checks) = self.pending_checks else {
            return Ok(SubmitOutcome::Immediate(reply));
        };

        let mut state = self.lock();
        // One outstanding wait per session; a new message supersedes any
        // reply that was never collected.
        state.deferred.clear();
        state.next_id += 1;
        let user_id = format!("offline-{}", state.next_id);
        state.deferred.insert(
            user_id.clone(),
            DeferredReply {
                pending_checks,
                reply,
            },
        );
        Ok(SubmitOutcome::Deferred { user_id })
    }

    async fn check_status(&self, user_id: &str) -> Result<PollResult, TransportError> {
        let mut state = self.lock();
        let Some(deferred) = state.deferred.get_mut(user_id) else {
            return Ok(PollResult::Error(format!("Unknown user id: {user_id}")));
        };
        if deferred.pending_checks > 0 {
            deferred.pending_checks -= 1;
            return Ok(PollResult::Pending);
        }
        let reply = state
            .deferred
            .remove(user_id)
            .map(|deferred| deferred.reply)
            .unwrap_or_default();
        Ok(PollResult::Completed(reply))
    }
}
