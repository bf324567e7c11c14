//! Linux framebuffer ioctl plumbing.
//!
//! Mirrors `struct fb_var_screeninfo` / `struct fb_fix_screeninfo` from
//! `<linux/fb.h>`; only the fields needed to size and address the pixel
//! memory are surfaced.

use std::io;
use std::os::fd::AsRawFd;

use crate::types::FrameGeometry;

pub const FBIOGET_VSCREENINFO: u32 = 0x4600;
pub const FBIOGET_FSCREENINFO: u32 = 0x4602;

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, Default)]
struct FbBitfield {
    offset: u32,
    length: u32,
    msb_right: u32,
}

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, Default)]
struct FbVarScreenInfo {
    xres: u32,
    yres: u32,
    xres_virtual: u32,
    yres_virtual: u32,
    xoffset: u32,
    yoffset: u32,
    bits_per_pixel: u32,
    grayscale: u32,
    red: FbBitfield,
    green: FbBitfield,
    blue: FbBitfield,
    transp: FbBitfield,
    nonstd: u32,
    activate: u32,
    height: u32,
    width: u32,
    accel_flags: u32,
    pixclock: u32,
    left_margin: u32,
    right_margin: u32,
    upper_margin: u32,
    lower_margin: u32,
    hsync_len: u32,
    vsync_len: u32,
    sync: u32,
    vmode: u32,
    rotate: u32,
    colorspace: u32,
    reserved: [u32; 4],
}

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, Default)]
struct FbFixScreenInfo {
    id: [u8; 16],
    smem_start: libc::c_ulong,
    smem_len: u32,
    type_: u32,
    type_aux: u32,
    visual: u32,
    xpanstep: u16,
    ypanstep: u16,
    ywrapstep: u16,
    line_length: u32,
    mmio_start: libc::c_ulong,
    mmio_len: u32,
    accel: u32,
    capabilities: u16,
    reserved: [u16; 2],
}

/// What the device reports about its pixel memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenInfo {
    pub xres: u32,
    pub yres: u32,
    pub yres_virtual: u32,
    pub line_length: u32,
    pub bits_per_pixel: u32,
    pub smem_len: u32,
}

impl ScreenInfo {
    /// Visible resolution bounds writes; the virtual height sizes the map.
    pub fn geometry(&self) -> FrameGeometry {
        FrameGeometry::new(self.xres, self.yres, self.line_length, self.yres_virtual)
    }

    /// Whether the reported pixel memory holds the whole mapped geometry.
    /// Drivers that report no memory size are taken at their word.
    pub fn fits_memory(&self) -> bool {
        self.smem_len == 0 || self.geometry().byte_len() <= self.smem_len as usize
    }

    /// Query both screen-info blocks from an open framebuffer device.
    pub fn query(device: &impl AsRawFd) -> io::Result<Self> {
        let fd = device.as_raw_fd();

        let mut var = FbVarScreenInfo::default();
        // SAFETY: `var` is a properly sized, writable fb_var_screeninfo.
        if unsafe { libc::ioctl(fd, FBIOGET_VSCREENINFO as _, &mut var as *mut FbVarScreenInfo) } < 0 {
            return Err(io::Error::last_os_error());
        }

        let mut fix = FbFixScreenInfo::default();
        // SAFETY: `fix` is a properly sized, writable fb_fix_screeninfo.
        if unsafe { libc::ioctl(fd, FBIOGET_FSCREENINFO as _, &mut fix as *mut FbFixScreenInfo) } < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(Self {
            xres: var.xres,
            yres: var.yres,
            yres_virtual: var.yres_virtual,
            line_length: fix.line_length,
            bits_per_pixel: var.bits_per_pixel,
            smem_len: fix.smem_len,
        })
    }
}
