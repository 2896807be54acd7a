//! Run statistics.

use std::fmt;
use std::time::Duration;

/// Aggregate statistics for one capture session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CaptureStats {
    /// Frames rendered and presented
    pub frames: u64,
    /// Wall time from entering the loop to leaving it
    pub elapsed: Duration,
}

impl CaptureStats {
    /// Frames per second over the whole run, 0 for an instantaneous run.
    pub fn average_fps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for CaptureStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Capture statistics:")?;
        writeln!(f, "  Frames:      {}", self.frames)?;
        writeln!(f, "  Elapsed:     {:.2}s", self.elapsed.as_secs_f64())?;
        write!(f, "  Average FPS: {:.2}", self.average_fps())
    }
}

/// Result of a fixed-iteration benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkReport {
    pub iterations: u32,
    pub elapsed: Duration,
}

impl BenchmarkReport {
    pub fn fps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.iterations as f64 / secs
        } else {
            0.0
        }
    }

    pub fn ms_per_frame(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1000.0 / self.iterations as f64
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Benchmark results:")?;
        writeln!(f, "  Iterations:  {}", self.iterations)?;
        writeln!(f, "  Elapsed:     {:.3}s", self.elapsed.as_secs_f64())?;
        writeln!(f, "  Throughput:  {:.2} FPS", self.fps())?;
        write!(f, "  Frame time:  {:.2} ms", self.ms_per_frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_fps() {
        let stats = CaptureStats {
            frames: 50,
            elapsed: Duration::from_secs(5),
        };
        assert!((stats.average_fps() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_fps_zero_elapsed() {
        let stats = CaptureStats {
            frames: 3,
            elapsed: Duration::ZERO,
        };
        assert_eq!(stats.average_fps(), 0.0);
    }

    #[test]
    fn test_stats_display() {
        let stats = CaptureStats {
            frames: 20,
            elapsed: Duration::from_millis(2500),
        };
        let text = stats.to_string();
        assert!(text.contains("Frames:      20"));
        assert!(text.contains("Elapsed:     2.50s"));
        assert!(text.contains("Average FPS: 8.00"));
    }

    #[test]
    fn test_benchmark_report_rates() {
        let report = BenchmarkReport {
            iterations: 100,
            elapsed: Duration::from_millis(500),
        };
        assert!((report.fps() - 200.0).abs() < 1e-9);
        assert!((report.ms_per_frame() - 5.0).abs() < 1e-9);
        assert!(report.to_string().contains("Iterations:  100"));
    }

    #[test]
    fn test_benchmark_report_zero_iterations() {
        let report = BenchmarkReport {
            iterations: 0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(report.fps(), 0.0);
        assert_eq!(report.ms_per_frame(), 0.0);
    }
}
