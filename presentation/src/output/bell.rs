//! Terminal bell as the receive sound

use parley_application::AudioSink;
use std::io::Write;

/// Rings the terminal bell (BEL) on stdout.
pub struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play_receive(&self) {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07").and_then(|()| stdout.flush());
    }
}
