//! Terminal management - scoped mode, frame output, key polling and size.

mod keys;
mod raw_mode;
mod sink;
mod size;

pub use keys::{is_quit_key, KeyPoller, NoKeys, StdinKeys};
pub use raw_mode::RawModeGuard;
pub use sink::TerminalSink;
pub use size::{fit_grid, size};

/// Clear the screen and move the cursor home.
pub const CLEAR_HOME: &str = "\x1b[2J\x1b[H";
