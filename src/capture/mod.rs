//! Capture sessions: the paced render loop, its cancellation, statistics and
//! the benchmark path.

mod benchmark;
mod cancel;
mod error;
mod session;
mod stats;
mod worker;

pub use benchmark::{run_benchmark, DEFAULT_ITERATIONS};
pub use cancel::{install_signal_handler, CancelToken};
pub use error::CaptureError;
pub use session::{frame_interval, CaptureSession, SessionReport, SessionState, StopReason};
pub use stats::{BenchmarkReport, CaptureStats};
pub use worker::{run_on_worker, WORKER_NAME};
