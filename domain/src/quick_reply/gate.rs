//! Turn-by-turn quick reply gating

use super::policy::QuickReplyPolicy;
use super::set::QuickReplySet;

/// What the view should do with the quick reply area after a bot turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Replace whatever is shown with this set.
    Render(QuickReplySet),
    /// Hide the visible set.
    Clear,
    /// Leave the quick reply area as it is.
    Unchanged,
}

/// Applies a [`QuickReplyPolicy`] to each incoming set.
///
/// Tracks the set currently visible and the last set rendered. The two
/// differ once the user activates a suggestion: the set is hidden but is
/// still the last one rendered, which is what `Dedup` compares against.
#[derive(Debug, Clone)]
pub struct QuickReplyGate {
    policy: QuickReplyPolicy,
    visible: Option<QuickReplySet>,
    last_rendered: Option<QuickReplySet>,
}

impl QuickReplyGate {
    pub fn new(policy: QuickReplyPolicy) -> Self {
        Self {
            policy,
            visible: None,
            last_rendered: None,
        }
    }

    pub fn policy(&self) -> QuickReplyPolicy {
        self.policy
    }

    pub fn visible(&self) -> Option<&QuickReplySet> {
        self.visible.as_ref()
    }

    /// Decide what to show for `incoming`.
    ///
    /// `first_exchange_done` is the persisted flag as it was *before* this
    /// turn completed.
    pub fn evaluate(&mut self, incoming: QuickReplySet, first_exchange_done: bool) -> GateDecision {
        if incoming.is_empty() {
            self.last_rendered = None;
            return self.clear_if_visible();
        }

        match self.policy {
            QuickReplyPolicy::FirstExchange if first_exchange_done => self.clear_if_visible(),
            QuickReplyPolicy::Dedup if self.last_rendered.as_ref() == Some(&incoming) => {
                GateDecision::Unchanged
            }
            _ => {
                self.visible = Some(incoming.clone());
                self.last_rendered = Some(incoming.clone());
                GateDecision::Render(incoming)
            }
        }
    }

    /// Hide the visible set (a suggestion was activated).
    pub fn hide(&mut self) -> Option<QuickReplySet> {
        self.visible.take()
    }

    fn clear_if_visible(&mut self) -> GateDecision {
        if self.visible.take().is_some() {
            GateDecision::Clear
        } else {
            GateDecision::Unchanged
        }
    }
}
