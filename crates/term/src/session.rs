//! DisplaySession: owns the mapped framebuffer and the terminal mode.
//!
//! The session is the single writer of the hardware surface. It is created
//! once at startup and released either by [`DisplaySession::shutdown`] or,
//! on error paths, by `Drop`.
//!
//! Raw mode is crossterm's full raw mode, which also clears `OPOST`: text
//! written to the terminal while the session is open gets no `\r`.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crossterm::terminal;
use memmap2::{MmapMut, MmapOptions};
use thiserror::Error;

use crate::config::SessionConfig;
use crate::core::{Present, Surface};
use crate::fbdev::ScreenInfo;
use crate::types::{FrameGeometry, BITS_PER_PIXEL};

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to open framebuffer device {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to query screen info from {}", .path.display())]
    Query {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("framebuffer {} reports an empty surface: {geometry:?}", .path.display())]
    EmptySurface { path: PathBuf, geometry: FrameGeometry },

    #[error("{} has {available} bytes of pixel memory, {needed} needed", .path.display())]
    MemoryTooSmall {
        path: PathBuf,
        needed: usize,
        available: u32,
    },

    #[error("failed to map {len} bytes of {}", .path.display())]
    Map {
        path: PathBuf,
        len: usize,
        #[source]
        source: io::Error,
    },

    #[error("failed to change terminal mode")]
    Terminal(#[source] io::Error),

    #[error("frame geometry {actual:?} does not match display {expected:?}")]
    GeometryMismatch {
        expected: FrameGeometry,
        actual: FrameGeometry,
    },
}

pub struct DisplaySession {
    map: MmapMut,
    _device: File,
    path: PathBuf,
    info: ScreenInfo,
    raw_mode: bool,
}

impl DisplaySession {
    /// Open the framebuffer, map its pixel memory, then enter raw mode.
    ///
    /// Device failures are reported before the terminal is touched, so a
    /// failed open needs no terminal restore.
    pub fn open(config: &SessionConfig) -> Result<Self, DisplayError> {
        let path = config.device.clone();
        let device = open_device(&path)?;

        let info = ScreenInfo::query(&device).map_err(|source| DisplayError::Query {
            path: path.clone(),
            source,
        })?;
        let geometry = info.geometry();
        if geometry.byte_len() == 0 {
            return Err(DisplayError::EmptySurface { path, geometry });
        }
        if info.bits_per_pixel != BITS_PER_PIXEL {
            log::warn!(
                "{} is {} bpp; frames are written as {} bpp RGB565",
                path.display(),
                info.bits_per_pixel,
                BITS_PER_PIXEL
            );
        }

        let len = geometry.byte_len();
        if !info.fits_memory() {
            return Err(DisplayError::MemoryTooSmall {
                path,
                needed: len,
                available: info.smem_len,
            });
        }
        // SAFETY: the mapping is shared with the device and only ever
        // written through this session; its length is what the device
        // reports for `line_length * yres_virtual`.
        let map = unsafe { MmapOptions::new().len(len).map_mut(&device) }.map_err(|source| {
            DisplayError::Map {
                path: path.clone(),
                len,
                source,
            }
        })?;

        log::info!(
            "mapped {}: {}x{} visible, stride {} bytes, {} rows, {} of {} bytes",
            path.display(),
            geometry.width,
            geometry.height,
            geometry.stride,
            geometry.rows,
            len,
            info.smem_len
        );

        let mut session = Self {
            map,
            _device: device,
            path,
            info,
            raw_mode: false,
        };

        if config.raw_tty {
            terminal::enable_raw_mode().map_err(DisplayError::Terminal)?;
            session.raw_mode = true;
        }

        Ok(session)
    }

    /// Copy a whole off-screen frame onto the mapped device memory.
    pub fn blit(&mut self, src: &Surface) -> Result<(), DisplayError> {
        let expected = self.info.geometry();
        if src.geometry() != expected {
            return Err(DisplayError::GeometryMismatch {
                expected,
                actual: src.geometry(),
            });
        }
        self.map.copy_from_slice(src.as_bytes());
        Ok(())
    }

    /// Restore the terminal, then unmap and close the device.
    pub fn shutdown(mut self) -> Result<(), DisplayError> {
        self.restore_terminal()?;
        log::info!("closed {}", self.path.display());
        Ok(())
    }

    fn restore_terminal(&mut self) -> Result<(), DisplayError> {
        if self.raw_mode {
            self.raw_mode = false;
            terminal::disable_raw_mode().map_err(DisplayError::Terminal)?;
        }
        Ok(())
    }
}

impl Present for DisplaySession {
    fn geometry(&self) -> FrameGeometry {
        self.info.geometry()
    }

    fn present(&mut self, frame: &Surface) -> anyhow::Result<()> {
        self.blit(frame)?;
        Ok(())
    }
}

impl Drop for DisplaySession {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        if let Err(err) = self.restore_terminal() {
            log::error!("{err}");
        }
    }
}

fn open_device(path: &Path) -> Result<File, DisplayError> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| DisplayError::Open {
            path: path.to_path_buf(),
            source,
        })
}
