//! The timed capture loop.
//!
//! A session moves `Idle -> Running -> Stopped` exactly once. While running it
//! renders a frame, presents it, sleeps for the frame period and polls for a
//! quit key; the cancel flag is checked before every frame. A frame is never
//! interrupted once started.

use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use crate::framebuffer::{Framebuffer, FramebufferError, PixelSource};
use crate::render::{DisplayConfig, FrameRenderer};
use crate::terminal::{KeyPoller, TerminalSink};

use super::cancel::CancelToken;
use super::error::CaptureError;
use super::stats::CaptureStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Stopped,
}

/// Why the loop stopped.
#[derive(Debug)]
pub enum StopReason {
    /// `q`, `Q` or Escape was pressed
    QuitKey,
    /// The cancel token was set (signal or caller)
    Cancelled,
    /// The configured number of frames was presented
    FrameLimit,
    /// Rendering or terminal output failed; not retried
    Failed(CaptureError),
}

/// Outcome of [`CaptureSession::run`]. Statistics are present on every path.
#[derive(Debug)]
pub struct SessionReport {
    pub stats: CaptureStats,
    pub reason: StopReason,
}

impl SessionReport {
    /// Consume the report, turning a failed run into its error.
    pub fn into_result(self) -> Result<CaptureStats, CaptureError> {
        match self.reason {
            StopReason::Failed(e) => Err(e),
            _ => Ok(self.stats),
        }
    }
}

/// Sleep between frames for `fps`, or `None` when unpaced.
pub fn frame_interval(fps: u32) -> Option<Duration> {
    (fps > 0).then(|| Duration::from_micros(1_000_000 / fps as u64))
}

/// A capture run over one pixel source.
pub struct CaptureSession<S: PixelSource> {
    source: Option<S>,
    renderer: FrameRenderer,
    cancel: CancelToken,
    frame_limit: Option<u64>,
    state: SessionState,
}

impl CaptureSession<Framebuffer> {
    /// Open the framebuffer at `path` for a new session.
    pub fn open(
        path: impl AsRef<Path>,
        config: DisplayConfig,
        cancel: CancelToken,
    ) -> Result<Self, FramebufferError> {
        let framebuffer = Framebuffer::open(path)?;
        Ok(Self::new(framebuffer, config, cancel))
    }
}

impl<S: PixelSource> CaptureSession<S> {
    pub fn new(source: S, config: DisplayConfig, cancel: CancelToken) -> Self {
        Self {
            source: Some(source),
            renderer: FrameRenderer::new(config),
            cancel,
            frame_limit: None,
            state: SessionState::Idle,
        }
    }

    /// Stop after `limit` presented frames.
    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.frame_limit = limit;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &DisplayConfig {
        self.renderer.config()
    }

    /// Run the loop until a quit key, cancellation, the frame limit or a
    /// failure. The source is released before returning.
    pub fn run<W: Write, K: KeyPoller + ?Sized>(
        &mut self,
        sink: &mut TerminalSink<W>,
        keys: &mut K,
    ) -> Result<SessionReport, CaptureError> {
        if self.state != SessionState::Idle {
            return Err(CaptureError::AlreadyStarted);
        }
        let source = self.source.take().ok_or(CaptureError::AlreadyStarted)?;

        self.state = SessionState::Running;
        let fps = self.renderer.config().fps;
        let interval = frame_interval(fps);
        log::info!(
            "Capture running: {}x{} source, {}x{} cells, {} fps",
            source.width(),
            source.height(),
            self.renderer.config().output_width,
            self.renderer.config().output_height,
            fps
        );

        let start = Instant::now();
        let mut frames = 0u64;

        let reason = loop {
            if self.cancel.is_cancelled() {
                break StopReason::Cancelled;
            }

            let presented = self
                .renderer
                .render(&source)
                .map_err(CaptureError::from)
                .and_then(|text| sink.present(text).map_err(CaptureError::from));
            if let Err(e) = presented {
                break StopReason::Failed(e);
            }
            frames += 1;

            if self.frame_limit.is_some_and(|limit| frames >= limit) {
                break StopReason::FrameLimit;
            }

            if let Some(interval) = interval {
                thread::sleep(interval);
            }

            match keys.poll_quit() {
                Ok(true) => break StopReason::QuitKey,
                Ok(false) => {}
                Err(e) => break StopReason::Failed(e.into()),
            }
        };

        drop(source);
        self.state = SessionState::Stopped;

        let stats = CaptureStats {
            frames,
            elapsed: start.elapsed(),
        };
        match &reason {
            StopReason::Failed(e) => log::error!("Capture stopped after {} frames: {}", frames, e),
            other => log::info!(
                "Capture stopped ({:?}): {} frames, {:.2} FPS",
                other,
                frames,
                stats.average_fps()
            ),
        }

        Ok(SessionReport { stats, reason })
    }
}
