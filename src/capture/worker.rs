//! Runs a capture session on a dedicated thread while the caller waits.

use std::io::Write;
use std::thread;

use crate::framebuffer::PixelSource;
use crate::terminal::{KeyPoller, TerminalSink};

use super::error::CaptureError;
use super::session::{CaptureSession, SessionReport};

/// Name of the capture worker thread.
pub const WORKER_NAME: &str = "capture";

/// Run `session` on the capture thread and block until it finishes.
pub fn run_on_worker<S, W, K>(
    session: CaptureSession<S>,
    sink: TerminalSink<W>,
    keys: K,
) -> Result<SessionReport, CaptureError>
where
    S: PixelSource + Send + 'static,
    W: Write + Send + 'static,
    K: KeyPoller + Send + 'static,
{
    let handle = thread::Builder::new()
        .name(WORKER_NAME.to_string())
        .spawn(move || {
            let mut session = session;
            let mut sink = sink;
            let mut keys = keys;
            session.run(&mut sink, &mut keys)
        })?;

    handle.join().map_err(|_| CaptureError::WorkerPanicked)?
}
