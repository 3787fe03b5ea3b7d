//! Receive-sound unlock state
//!
//! Playback stays locked until the first user gesture, the way browsers
//! block audio that was not started from user interaction.

/// Whether the receive sound may play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioState {
    #[default]
    Locked,
    Unlocked,
}

impl AudioState {
    /// Apply a user gesture. Returns `true` if this gesture did the unlocking.
    pub fn on_gesture(&mut self) -> bool {
        match self {
            AudioState::Locked => {
                *self = AudioState::Unlocked;
                true
            }
            AudioState::Unlocked => false,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, AudioState::Unlocked)
    }
}
