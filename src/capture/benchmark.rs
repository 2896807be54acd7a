//! Fixed-iteration render benchmark.

use std::time::Instant;

use crate::framebuffer::PixelSource;
use crate::render::{render_into, DisplayConfig, RenderError};

use super::stats::BenchmarkReport;

/// Iterations used when none are requested.
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Render `iterations` frames back to back with no output and no pacing.
pub fn run_benchmark<S: PixelSource + ?Sized>(
    source: &S,
    config: &DisplayConfig,
    iterations: u32,
) -> Result<BenchmarkReport, RenderError> {
    let mut buffer = String::new();
    let start = Instant::now();

    for _ in 0..iterations {
        render_into(source, config, &mut buffer)?;
    }

    let report = BenchmarkReport {
        iterations,
        elapsed: start.elapsed(),
    };
    log::info!(
        "Benchmark: {} iterations, {:.2} FPS, {:.2} ms/frame",
        report.iterations,
        report.fps(),
        report.ms_per_frame()
    );
    Ok(report)
}
