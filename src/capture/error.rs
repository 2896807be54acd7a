//! Errors that stop a capture session.

use std::io;

use crate::framebuffer::FramebufferError;
use crate::render::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error(transparent)]
    Framebuffer(#[from] FramebufferError),

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Capture session has already been started")]
    AlreadyStarted,

    #[error("Capture worker panicked")]
    WorkerPanicked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_error_display() {
        let err = CaptureError::from(RenderError::InvalidOutputSize { width: 0, height: 0 });
        assert_eq!(err.to_string(), "Render failed: Output size must be at least 1x1, got 0x0");

        let err = CaptureError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_string(), "Terminal I/O failed: closed");

        assert_eq!(
            CaptureError::AlreadyStarted.to_string(),
            "Capture session has already been started"
        );
    }

    #[test]
    fn test_framebuffer_error_is_transparent() {
        let source = FramebufferError::DeviceOpen {
            path: "/dev/fb9".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let expected = source.to_string();
        assert_eq!(CaptureError::from(source).to_string(), expected);
    }
}
