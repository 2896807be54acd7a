//! Discovery of framebuffer device nodes.

use std::path::{Path, PathBuf};

use super::device::{query, FramebufferError, FramebufferInfo};

/// Number of `/dev/fbN` nodes probed by [`list_devices`].
pub const PROBED_DEVICES: usize = 4;

/// A device node that exists, with the outcome of querying it.
#[derive(Debug)]
pub struct ProbedDevice {
    pub path: PathBuf,
    pub info: Result<FramebufferInfo, FramebufferError>,
}

impl std::fmt::Display for ProbedDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.info {
            Ok(info) => write!(f, "{}", info),
            Err(e) => write!(f, "{}: unavailable ({})", self.path.display(), e),
        }
    }
}

/// Probe `/dev/fb0` through `/dev/fb3`.
pub fn list_devices() -> Vec<ProbedDevice> {
    list_devices_in(Path::new("/dev"))
}

/// Probe `fb0`..`fb3` under `dir`. Nodes that do not exist are skipped.
pub fn list_devices_in(dir: &Path) -> Vec<ProbedDevice> {
    (0..PROBED_DEVICES)
        .map(|i| dir.join(format!("fb{}", i)))
        .filter(|path| path.exists())
        .map(|path| {
            let info = query(&path);
            ProbedDevice { path, info }
        })
        .collect()
}
