//! Scoped terminal mode with panic-safe cleanup.
//!
//! Entering the mode turns off line buffering and echo on stdin, hides the
//! cursor and clears the screen. Leaving it (explicitly, on drop, or from the
//! panic hook) restores the saved termios, shows the cursor and resets colors.

use crossterm::cursor::{Hide, Show};
use crossterm::style::ResetColor;
use crossterm::{execute, queue};
use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::CLEAR_HOME;

/// Static flag to track if raw mode is active (for panic handler)
pub(crate) static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Termios in effect before the mode was entered. `None` when stdin is not a TTY.
static SAVED_TERMIOS: Mutex<Option<libc::termios>> = Mutex::new(None);

/// Guard that restores the terminal when dropped.
pub struct RawModeGuard {
    /// Whether this guard is responsible for cleanup
    active: bool,
}

impl RawModeGuard {
    /// Enter the capture terminal mode.
    ///
    /// When stdin is not a TTY the termios step is skipped; cursor and screen
    /// control are still written to stdout.
    pub fn enter() -> io::Result<Self> {
        Self::enter_on(&mut io::stdout())
    }

    /// Enter the mode, writing the cursor and screen control to `out`.
    fn enter_on<W: Write>(out: &mut W) -> io::Result<Self> {
        install_panic_hook();

        disable_line_buffering()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        // From here on a failed write restores the terminal through Drop
        let guard = Self { active: true };

        queue!(out, Hide)?;
        out.write_all(CLEAR_HOME.as_bytes())?;
        out.flush()?;

        Ok(guard)
    }

    /// Restore the terminal now. Drop becomes a no-op afterwards.
    pub fn exit(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            restore_terminal()?;
        }
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            // Best-effort cleanup - ignore errors during drop
            let _ = restore_terminal();
        }
    }
}

fn disable_line_buffering() -> io::Result<()> {
    let fd = libc::STDIN_FILENO;
    if unsafe { libc::isatty(fd) } == 0 {
        log::debug!("stdin is not a TTY, leaving its mode untouched");
        return Ok(());
    }

    // SAFETY: termios is plain data; tcgetattr fills it before it is read.
    let original = unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(fd, &mut termios) != 0 {
            return Err(io::Error::last_os_error());
        }
        termios
    };

    let mut raw = original;
    raw.c_lflag &= !(libc::ICANON | libc::ECHO);
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &raw) } != 0 {
        return Err(io::Error::last_os_error());
    }

    if let Ok(mut saved) = SAVED_TERMIOS.lock() {
        *saved = Some(original);
    }
    Ok(())
}

/// Put back the saved termios, show the cursor and reset colors.
fn restore_terminal() -> io::Result<()> {
    RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);

    let saved = SAVED_TERMIOS.lock().ok().and_then(|mut s| s.take());
    let termios_result = match saved {
        Some(original) => {
            if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &original) } != 0 {
                Err(io::Error::last_os_error())
            } else {
                Ok(())
            }
        }
        None => Ok(()),
    };

    // Cursor and colors are restored even if termios restoration failed
    execute!(io::stdout(), Show, ResetColor)?;

    termios_result
}

/// Install a panic hook that restores terminal state before panicking.
pub(crate) fn install_panic_hook() {
    // Only install once - check if we've already installed
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return; // Already installed
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if RAW_MODE_ACTIVE.load(Ordering::SeqCst) {
            let _ = restore_terminal();
        }
        original_hook(panic_info);
    }));
}
