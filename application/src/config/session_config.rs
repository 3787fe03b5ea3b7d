//! Per-session settings.

use super::poll_params::PollParams;
use parley_domain::QuickReplyPolicy;

/// Settings the chat session controller is built with.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// When quick replies are shown.
    pub policy: QuickReplyPolicy,
    /// Status-check loop for deferred replies.
    pub poll: PollParams,
    /// Play the receive sound on bot replies (once audio is unlocked).
    pub sound_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            policy: QuickReplyPolicy::default(),
            poll: PollParams::default(),
            sound_enabled: true,
        }
    }
}

impl SessionConfig {
    pub fn with_policy(mut self, policy: QuickReplyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_poll(mut self, poll: PollParams) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }
}
