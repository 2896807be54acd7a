//! Device-backed framebuffer: open, query, map, read, close.

use std::fs::File;
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};

use super::format::{PixelFormat, Rgb};
use super::geometry::{Geometry, OutOfBounds, PixelSource};
use super::ioctl::{geometry_from, query_screen_info};
use super::mapping::Mapping;

/// Errors raised while acquiring a framebuffer.
#[derive(Debug, thiserror::Error)]
pub enum FramebufferError {
    #[error("Failed to open framebuffer device '{}': {source}", .path.display())]
    DeviceOpen { path: PathBuf, source: io::Error },

    #[error("Failed to query screen info on '{}' ({request}): {source}", .path.display())]
    GeometryQuery {
        path: PathBuf,
        request: &'static str,
        source: io::Error,
    },

    #[error("Failed to map {len} bytes of '{}': {source}", .path.display())]
    Map {
        path: PathBuf,
        len: usize,
        source: io::Error,
    },

    #[error(
        "Framebuffer '{}' reports {size} bytes, less than {line_length} bytes x {height} lines",
        .path.display()
    )]
    InconsistentGeometry {
        path: PathBuf,
        size: usize,
        line_length: u32,
        height: u32,
    },
}

/// Screen info for a device, gathered without mapping its buffer.
#[derive(Debug, Clone)]
pub struct FramebufferInfo {
    pub path: PathBuf,
    pub geometry: Geometry,
    /// Length of the mappable buffer in bytes
    pub buffer_len: usize,
}

impl std::fmt::Display for FramebufferInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}x{} @ {} bpp, {} ({} bytes/line, {} bytes)",
            self.path.display(),
            self.geometry.width,
            self.geometry.height,
            self.geometry.bits_per_pixel,
            self.geometry.format,
            self.geometry.line_length,
            self.buffer_len
        )
    }
}

/// Open `path` read-only and run both geometry queries.
fn open_and_query(path: &Path) -> Result<(File, FramebufferInfo), FramebufferError> {
    let file = File::open(path).map_err(|source| FramebufferError::DeviceOpen {
        path: path.to_path_buf(),
        source,
    })?;

    // `file` is dropped (closed) on every early return below.
    let (fix, var) = query_screen_info(file.as_raw_fd()).map_err(|(request, source)| {
        FramebufferError::GeometryQuery {
            path: path.to_path_buf(),
            request: request.name(),
            source,
        }
    })?;

    let info = FramebufferInfo {
        path: path.to_path_buf(),
        geometry: geometry_from(&fix, &var),
        buffer_len: fix.smem_len as usize,
    };
    Ok((file, info))
}

/// Query a device's geometry without mapping it.
pub fn query(path: impl AsRef<Path>) -> Result<FramebufferInfo, FramebufferError> {
    open_and_query(path.as_ref()).map(|(_file, info)| info)
}

/// A memory-mapped framebuffer device.
///
/// The handle and mapping are released by [`Framebuffer::close`] or on drop,
/// whichever comes first.
#[derive(Debug)]
pub struct Framebuffer {
    info: FramebufferInfo,
    mapping: Option<Mapping>,
    file: Option<File>,
}

impl Framebuffer {
    /// Open a framebuffer device and map its buffer read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FramebufferError> {
        let path = path.as_ref();
        let (file, info) = open_and_query(path)?;
        let geometry = info.geometry;

        if info.buffer_len < geometry.required_len() {
            return Err(FramebufferError::InconsistentGeometry {
                path: path.to_path_buf(),
                size: info.buffer_len,
                line_length: geometry.line_length,
                height: geometry.height,
            });
        }

        let mapping =
            Mapping::map_readonly(file.as_raw_fd(), info.buffer_len).map_err(|source| {
                FramebufferError::Map {
                    path: path.to_path_buf(),
                    len: info.buffer_len,
                    source,
                }
            })?;

        log::info!("Opened {}", info);
        if geometry.format == PixelFormat::Unknown {
            log::warn!(
                "Unrecognized pixel layout at {} bpp, falling back to grayscale",
                geometry.bits_per_pixel
            );
        }

        Ok(Self {
            info,
            mapping: Some(mapping),
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.info.path
    }

    pub fn info(&self) -> &FramebufferInfo {
        &self.info
    }

    pub fn geometry(&self) -> &Geometry {
        &self.info.geometry
    }

    pub fn format(&self) -> PixelFormat {
        self.info.geometry.format
    }

    /// Size of the mapped buffer in bytes.
    pub fn size(&self) -> usize {
        self.info.buffer_len
    }

    pub fn is_open(&self) -> bool {
        self.mapping.is_some()
    }

    /// Unmap the buffer and close the device. Safe to call repeatedly.
    pub fn close(&mut self) {
        if self.mapping.take().is_some() {
            log::debug!("Unmapped {}", self.info.path.display());
        }
        self.file = None;
    }
}

impl PixelSource for Framebuffer {
    fn width(&self) -> u32 {
        self.info.geometry.width
    }

    fn height(&self) -> u32 {
        self.info.geometry.height
    }

    /// Reads after [`Framebuffer::close`] report out of bounds.
    fn read_pixel(&self, x: u32, y: u32) -> Result<Rgb, OutOfBounds> {
        match &self.mapping {
            Some(mapping) => self.info.geometry.read_pixel(mapping.as_bytes(), x, y),
            None => Err(OutOfBounds { x, y }),
        }
    }
}

impl Drop for Framebuffer {
    fn drop(&mut self) {
        self.close();
    }
}
