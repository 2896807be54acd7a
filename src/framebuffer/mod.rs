//! Framebuffer acquisition and pixel decoding.
//!
//! - [`Framebuffer`] opens an fbdev node, queries its geometry and maps the
//!   buffer read-only
//! - [`PixelFormat`] decodes the supported binary layouts
//! - [`PixelSource`] is the bounds-checked read interface the renderer uses,
//!   implemented by [`Framebuffer`] and the in-memory [`PixelView`]

mod device;
mod format;
mod geometry;
mod ioctl;
mod mapping;
mod probe;

pub use device::{query, Framebuffer, FramebufferError, FramebufferInfo};
pub use format::{PixelFormat, Rgb};
pub use geometry::{Geometry, OutOfBounds, PixelSource, PixelView};
pub use probe::{list_devices, list_devices_in, ProbedDevice, PROBED_DEVICES};

/// Device opened when none is configured.
pub const DEFAULT_DEVICE: &str = "/dev/fb0";
