//! Frame output.

use std::io::{self, Write};

use super::CLEAR_HOME;

/// Writes finished frames to a terminal, each preceded by clear + home.
pub struct TerminalSink<W: Write> {
    out: W,
    presented: u64,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, presented: 0 }
    }

    /// Present one complete frame and flush.
    pub fn present(&mut self, frame: &str) -> io::Result<()> {
        self.out.write_all(CLEAR_HOME.as_bytes())?;
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        self.presented += 1;
        Ok(())
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
