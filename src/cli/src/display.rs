use al_lib::{debug_log, DisplaySink};
use std::io::Write;

/// Writes run output straight to stdout as it arrives.
pub struct StdoutSink {
    out: std::io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl DisplaySink for StdoutSink {
    fn clear(&mut self) {
        // a fresh process has nothing on screen of its own to clear
        debug_log!("Terminal cleared");
    }

    fn append(&mut self, text: &str) {
        let mut out = self.out.lock();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            debug_log!("Failed to write output: {e}");
        }
    }
}
