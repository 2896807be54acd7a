//! Non-blocking quit-key polling.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

/// Source of the interactive quit request, polled once per frame.
pub trait KeyPoller {
    /// Consume pending input and report whether a quit key was seen.
    /// Never blocks.
    fn poll_quit(&mut self) -> io::Result<bool>;
}

/// `q`, `Q` or Escape.
pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
}

/// Reads terminal key events with a zero timeout, draining whatever is queued.
#[derive(Debug, Default)]
pub struct StdinKeys;

impl KeyPoller for StdinKeys {
    fn poll_quit(&mut self) -> io::Result<bool> {
        let mut quit = false;
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit_key(key.code) {
                    quit = true;
                }
            }
        }
        Ok(quit)
    }
}

/// Never requests a quit. Used when keyboard input is not wanted.
#[derive(Debug, Default)]
pub struct NoKeys;

impl KeyPoller for NoKeys {
    fn poll_quit(&mut self) -> io::Result<bool> {
        Ok(false)
    }
}
