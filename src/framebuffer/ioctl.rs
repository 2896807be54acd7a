//! Linux fbdev screen-info structures and the two geometry queries.
//!
//! Layouts mirror `<linux/fb.h>`.

use std::io;
use std::os::unix::io::RawFd;

use super::format::PixelFormat;
use super::geometry::Geometry;

pub const FBIOGET_VSCREENINFO: u32 = 0x4600;
pub const FBIOGET_FSCREENINFO: u32 = 0x4602;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FbBitfield {
    pub offset: u32,
    pub length: u32,
    pub msb_right: u32,
}

/// `struct fb_fix_screeninfo`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FixScreenInfo {
    pub id: [u8; 16],
    pub smem_start: libc::c_ulong,
    /// Length of the mappable buffer in bytes
    pub smem_len: u32,
    pub type_: u32,
    pub type_aux: u32,
    pub visual: u32,
    pub xpanstep: u16,
    pub ypanstep: u16,
    pub ywrapstep: u16,
    pub line_length: u32,
    pub mmio_start: libc::c_ulong,
    pub mmio_len: u32,
    pub accel: u32,
    pub capabilities: u16,
    pub reserved: [u16; 2],
}

/// `struct fb_var_screeninfo`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct VarScreenInfo {
    pub xres: u32,
    pub yres: u32,
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    pub xoffset: u32,
    pub yoffset: u32,
    pub bits_per_pixel: u32,
    pub grayscale: u32,
    pub red: FbBitfield,
    pub green: FbBitfield,
    pub blue: FbBitfield,
    pub transp: FbBitfield,
    pub nonstd: u32,
    pub activate: u32,
    pub height: u32,
    pub width: u32,
    pub accel_flags: u32,
    pub pixclock: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub upper_margin: u32,
    pub lower_margin: u32,
    pub hsync_len: u32,
    pub vsync_len: u32,
    pub sync: u32,
    pub vmode: u32,
    pub rotate: u32,
    pub colorspace: u32,
    pub reserved: [u32; 4],
}

/// Which of the two screen-info queries failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenInfoRequest {
    Fixed,
    Variable,
}

impl ScreenInfoRequest {
    pub fn name(&self) -> &'static str {
        match self {
            ScreenInfoRequest::Fixed => "FBIOGET_FSCREENINFO",
            ScreenInfoRequest::Variable => "FBIOGET_VSCREENINFO",
        }
    }
}

/// Run both screen-info queries on an open device descriptor.
pub fn query_screen_info(
    fd: RawFd,
) -> Result<(FixScreenInfo, VarScreenInfo), (ScreenInfoRequest, io::Error)> {
    let mut fix = FixScreenInfo::default();
    let mut var = VarScreenInfo::default();

    // SAFETY: both structs are repr(C) and match the kernel's layout, and the
    // pointers stay valid for the duration of each call.
    let rc = unsafe { libc::ioctl(fd, FBIOGET_FSCREENINFO as _, &mut fix as *mut FixScreenInfo) };
    if rc < 0 {
        return Err((ScreenInfoRequest::Fixed, io::Error::last_os_error()));
    }

    let rc = unsafe { libc::ioctl(fd, FBIOGET_VSCREENINFO as _, &mut var as *mut VarScreenInfo) };
    if rc < 0 {
        return Err((ScreenInfoRequest::Variable, io::Error::last_os_error()));
    }

    Ok((fix, var))
}

/// Visible geometry and pixel format described by the screen info pair.
pub fn geometry_from(fix: &FixScreenInfo, var: &VarScreenInfo) -> Geometry {
    Geometry {
        width: var.xres,
        height: var.yres,
        bits_per_pixel: var.bits_per_pixel,
        line_length: fix.line_length,
        format: PixelFormat::detect(
            var.bits_per_pixel,
            var.red.offset,
            var.green.offset,
            var.blue.offset,
        ),
    }
}
