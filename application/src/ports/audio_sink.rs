//! Audio sink port for the receive sound.

/// Plays the sound cue for an incoming bot reply.
pub trait AudioSink: Send + Sync {
    fn play_receive(&self);
}

/// Silent sink.
pub struct NoAudio;

impl AudioSink for NoAudio {
    fn play_receive(&self) {}
}
