//! Chat session use case.
//!
//! [`ChatSessionController`] owns one chat session: the message log, the
//! quick reply gate, the persisted first-exchange flag, audio unlock state
//! and the exchange state machine. It drives a [`ChatTransport`] to obtain
//! replies and a [`ChatView`] to show them.
//!
//! # Reply acquisition
//!
//! 1. `submit` appends the user message and calls the transport
//! 2. An inline reply goes straight to `on_backend_reply`
//! 3. A deferred reply is polled for by user id at a fixed interval until
//!    the backend reports `completed` or `error`
//!
//! Only one reply may be awaited at a time; a second `submit` while one is
//! outstanding is rejected with [`ChatError::ReplyPending`].

use crate::config::SessionConfig;
use crate::ports::audio_sink::{AudioSink, NoAudio};
use crate::ports::chat_transport::ChatTransport;
use crate::ports::chat_view::ChatView;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::state_store::{KeyValueStore, StoreError};
use crate::use_cases::shared::{cancellable_sleep, until_cancelled};
use parley_domain::core::text::{non_blank, preview};
use parley_domain::{
    AudioState, BotReply, ChatLog, DomainError, ExchangeMachine, ExchangePhase, ExchangeState,
    FIRST_EXCHANGE_KEY, GateDecision, Message, PendingRequest, PendingStatus, PollResult,
    QuickReplyGate, QuickReplySet, SubmitOutcome,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors returned by the chat session controller.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("A reply is still pending")]
    ReplyPending,

    #[error("No quick reply at position {0}")]
    UnknownQuickReply(usize),

    #[error("State store error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// How an exchange ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// Blank input; nothing was appended or sent.
    Ignored,
    /// The bot reply was rendered.
    Rendered,
    /// The backend failed or reported an error; no bot message.
    Failed,
    /// The session was shut down before sending or while waiting.
    Cancelled,
}

struct SessionState {
    log: ChatLog,
    machine: ExchangeMachine,
    gate: QuickReplyGate,
    exchange: ExchangeState,
    audio: AudioState,
    pending: Option<PendingRequest>,
}

/// Controller for one chat session.
pub struct ChatSessionController {
    transport: Arc<dyn ChatTransport>,
    store: Arc<dyn KeyValueStore>,
    view: Arc<dyn ChatView>,
    audio_sink: Arc<dyn AudioSink>,
    conversation_logger: Arc<dyn ConversationLogger>,
    config: SessionConfig,
    state: Mutex<SessionState>,
    cancellation: CancellationToken,
}

impl ChatSessionController {
    /// Create a controller, loading the first-exchange flag from `store`.
    pub fn new(
        transport: Arc<dyn ChatTransport>,
        store: Arc<dyn KeyValueStore>,
        view: Arc<dyn ChatView>,
        config: SessionConfig,
    ) -> Result<Self, ChatError> {
        let stored = store.get(FIRST_EXCHANGE_KEY)?;
        let exchange = ExchangeState::from_stored(stored.as_deref());
        debug!(
            "Loaded exchange state: first_exchange_done={}",
            exchange.first_exchange_done
        );

        Ok(Self {
            transport,
            store,
            view,
            audio_sink: Arc::new(NoAudio),
            conversation_logger: Arc::new(NoConversationLogger),
            state: Mutex::new(SessionState {
                log: ChatLog::new(),
                machine: ExchangeMachine::new(),
                gate: QuickReplyGate::new(config.policy),
                exchange,
                audio: AudioState::default(),
                pending: None,
            }),
            config,
            cancellation: CancellationToken::new(),
        })
    }

    /// Create with an audio sink for the receive sound.
    pub fn with_audio_sink(mut self, sink: Arc<dyn AudioSink>) -> Self {
        self.audio_sink = sink;
        self
    }

    /// Create with a transcript logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Tie the session to an outer cancellation token (e.g. Ctrl-C handling).
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ==================== Queries ====================

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state().log.messages().to_vec()
    }

    pub fn phase(&self) -> ExchangePhase {
        self.state().machine.phase()
    }

    pub fn exchange_state(&self) -> ExchangeState {
        self.state().exchange
    }

    pub fn audio_state(&self) -> AudioState {
        self.state().audio
    }

    pub fn pending_request(&self) -> Option<PendingRequest> {
        self.state().pending.clone()
    }

    pub fn visible_quick_replies(&self) -> Option<QuickReplySet> {
        self.state().gate.visible().cloned()
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    // ==================== Operations ====================

    /// Unlock the receive sound. The first call does the unlocking.
    pub fn on_user_gesture(&self) {
        if self.state().audio.on_gesture() {
            debug!("Audio unlocked by user gesture");
        }
    }

    /// Submit a user message and wait for the bot's reply.
    ///
    /// Blank input is ignored without touching the log or the network, as is
    /// any input after `shutdown`.
    pub async fn submit(&self, text: &str) -> Result<ExchangeOutcome, ChatError> {
        let Some(text) = non_blank(text) else {
            debug!("Ignoring blank submission");
            return Ok(ExchangeOutcome::Ignored);
        };
        if self.is_shut_down() {
            debug!("Session shut down; not sending");
            return Ok(ExchangeOutcome::Cancelled);
        }

        let message = {
            let mut state = self.state();
            if state
                .machine
                .transition(ExchangePhase::AwaitingReply)
                .is_err()
            {
                return Err(ChatError::ReplyPending);
            }
            if state.audio.on_gesture() {
                debug!("Audio unlocked by user gesture");
            }
            state.log.append(Message::user(text)).clone()
        };

        info!("Submitting message: {}", preview(text, 80));
        self.view.append_message(&message);
        self.view.clear_input();
        self.view.show_typing();
        self.conversation_logger
            .log(ConversationEvent::user_message(text));

        let Some(result) = until_cancelled(&self.cancellation, self.transport.submit(text)).await
        else {
            return Ok(self.cancel_exchange());
        };

        match result {
            Ok(SubmitOutcome::Immediate(reply)) => Ok(self.on_backend_reply(reply)),
            Ok(SubmitOutcome::Deferred { user_id }) => self.poll_pending(&user_id).await,
            Err(e) => {
                warn!("Sending message via {} failed: {}", self.transport.kind(), e);
                Ok(self.fail_exchange(&e.to_string()))
            }
        }
    }

    /// Handle a bot turn.
    ///
    /// Also accepts unsolicited turns (e.g. pushed while idle); those are
    /// rendered without touching the exchange state machine and do not
    /// complete the first exchange.
    pub fn on_backend_reply(&self, reply: BotReply) -> ExchangeOutcome {
        self.view.hide_typing();

        let quick_replies = &reply.quick_replies;

        let (appended, decision, first_exchange, play_sound) = {
            let mut state = self.state();
            let was_done = state.exchange.first_exchange_done;
            let answering = state.machine.phase().is_waiting();

            let appended = reply
                .text()
                .map(|text| state.log.append(Message::bot(text)).clone());
            let decision = state.gate.evaluate(quick_replies.clone(), was_done);

            if answering {
                state.exchange.first_exchange_done = true;
                state.pending = None;
                let _ = state.machine.transition(ExchangePhase::Rendered);
                state.machine.settle();
            }

            let play_sound = self.config.sound_enabled && state.audio.is_unlocked();
            (appended, decision, answering && !was_done, play_sound)
        };

        if first_exchange {
            self.persist_exchange_state(true);
        }

        if let Some(message) = &appended {
            info!("Bot replied: {}", preview(message.text(), 80));
            self.view.append_message(message);
            self.conversation_logger
                .log(ConversationEvent::bot_message(message.text()));
        } else {
            debug!("Bot turn carried no reply text");
        }

        match &decision {
            GateDecision::Render(set) => {
                debug!(
                    "Rendering {} quick replies ({})",
                    set.len(),
                    self.config.policy
                );
                self.view.render_quick_replies(set);
                self.conversation_logger
                    .log(ConversationEvent::quick_replies(set.labels()));
            }
            GateDecision::Clear => self.view.clear_quick_replies(),
            GateDecision::Unchanged => {
                if !quick_replies.is_empty() {
                    debug!(
                        "Quick replies suppressed by {} policy",
                        self.config.policy
                    );
                }
            }
        }

        if play_sound {
            self.audio_sink.play_receive();
        }

        ExchangeOutcome::Rendered
    }

    /// Poll for a deferred reply until it completes, fails, or the session
    /// is cancelled.
    ///
    /// Must be called while a reply is awaited (after `submit` got a
    /// deferral).
    pub async fn poll_pending(&self, user_id: &str) -> Result<ExchangeOutcome, ChatError> {
        {
            let mut state = self.state();
            state.machine.transition(ExchangePhase::Polling)?;
            state.pending = Some(PendingRequest::new(user_id));
        }
        info!("Reply deferred; polling for user {}", user_id);

        let params = self.config.poll.clone();
        let mut attempts: u32 = 0;

        loop {
            if params.exhausted(attempts) {
                warn!(
                    "No reply for user {} after {} status checks",
                    user_id, attempts
                );
                return Ok(self.fail_exchange(&format!(
                    "no reply after {} status checks",
                    attempts
                )));
            }

            if !cancellable_sleep(&self.cancellation, params.interval).await {
                return Ok(self.cancel_exchange());
            }

            attempts += 1;
            let Some(result) =
                until_cancelled(&self.cancellation, self.transport.check_status(user_id)).await
            else {
                return Ok(self.cancel_exchange());
            };

            match result {
                Ok(PollResult::Completed(reply)) => {
                    self.record_poll(user_id, attempts, PendingStatus::Completed);
                    return Ok(self.on_backend_reply(reply));
                }
                Ok(PollResult::Error(message)) => {
                    self.record_poll(user_id, attempts, PendingStatus::Error);
                    warn!("Backend reported an error for user {}: {}", user_id, message);
                    return Ok(self.fail_exchange(&message));
                }
                Ok(PollResult::Pending) => {
                    self.record_poll(user_id, attempts, PendingStatus::Pending);
                    debug!("Reply for user {} still pending (check {})", user_id, attempts);
                }
                Err(e) => {
                    warn!("Status check for user {} failed: {}", user_id, e);
                    return Ok(self.fail_exchange(&e.to_string()));
                }
            }
        }
    }

    /// Activate the quick reply at `index` (0-based): hide the set and
    /// resubmit the label as a user message.
    pub async fn activate_quick_reply(&self, index: usize) -> Result<ExchangeOutcome, ChatError> {
        let label = {
            let mut state = self.state();
            if state.machine.phase().is_waiting() {
                return Err(ChatError::ReplyPending);
            }
            let label = state
                .gate
                .visible()
                .and_then(|set| set.get(index))
                .map(str::to_string)
                .ok_or(ChatError::UnknownQuickReply(index))?;
            state.gate.hide();
            label
        };

        debug!("Quick reply activated: {}", label);
        self.view.clear_quick_replies();
        self.submit(&label).await
    }

    /// Forget that the first exchange happened.
    pub fn reset_exchange_state(&self) -> Result<(), ChatError> {
        self.store
            .set(FIRST_EXCHANGE_KEY, ExchangeState::default().stored_value())?;
        self.state().exchange = ExchangeState::default();
        info!("Exchange state reset");
        Ok(())
    }

    /// Tear down the session: any in-flight wait ends as cancelled.
    pub fn shutdown(&self) {
        debug!("Shutting down chat session");
        self.cancellation.cancel();
    }

    // ==================== Internals ====================

    fn record_poll(&self, user_id: &str, attempt: u32, status: PendingStatus) {
        {
            let mut state = self.state();
            if let Some(pending) = state.pending.as_mut() {
                pending.record_poll(status);
            }
            if status.is_terminal() {
                state.pending = None;
            }
        }
        self.conversation_logger
            .log(ConversationEvent::poll(user_id, attempt, status));
    }

    fn persist_exchange_state(&self, done: bool) {
        let value = ExchangeState {
            first_exchange_done: done,
        }
        .stored_value();
        if let Err(e) = self.store.set(FIRST_EXCHANGE_KEY, value) {
            warn!("Could not persist exchange state: {}", e);
        }
    }

    fn fail_exchange(&self, reason: &str) -> ExchangeOutcome {
        self.end_exchange(ExchangePhase::Failed);
        self.view.on_exchange_failed(reason);
        self.conversation_logger
            .log(ConversationEvent::exchange_failed(reason));
        ExchangeOutcome::Failed
    }

    fn cancel_exchange(&self) -> ExchangeOutcome {
        info!("Exchange cancelled");
        self.end_exchange(ExchangePhase::Cancelled);
        ExchangeOutcome::Cancelled
    }

    fn end_exchange(&self, terminal: ExchangePhase) {
        self.view.hide_typing();
        let mut state = self.state();
        state.pending = None;
        if let Err(e) = state.machine.transition(terminal) {
            debug!("Ignoring exchange end: {}", e);
        }
        state.machine.settle();
    }
}
