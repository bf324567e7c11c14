//! Presentation contract.
//!
//! A presenter owns the visible surface and accepts whole off-screen frames.
//! The device-backed implementation lives in the terminal crate; the
//! in-memory one here is used for headless runs and tests.

use anyhow::{ensure, Result};

use crate::surface::Surface;
use crate::types::{FrameGeometry, PackedColor};

/// A visible pixel surface that off-screen frames are copied onto.
pub trait Present {
    /// Layout of the visible surface. Off-screen frames must be allocated
    /// with exactly this geometry.
    fn geometry(&self) -> FrameGeometry;

    /// Copy the whole of `frame` onto the visible surface.
    fn present(&mut self, frame: &Surface) -> Result<()>;

    /// Allocate a black off-screen frame matching this presenter.
    fn create_buffer(&self) -> Surface {
        Surface::new(self.geometry())
    }
}

/// Heap-backed stand-in for a hardware framebuffer.
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    front: Surface,
    frames_presented: u64,
}

impl MemoryDisplay {
    pub fn new(geometry: FrameGeometry) -> Self {
        Self {
            front: Surface::new(geometry),
            frames_presented: 0,
        }
    }

    /// The last presented frame.
    pub fn front(&self) -> &Surface {
        &self.front
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<PackedColor> {
        self.front.pixel(x, y)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Present for MemoryDisplay {
    fn geometry(&self) -> FrameGeometry {
        self.front.geometry()
    }

    fn present(&mut self, frame: &Surface) -> Result<()> {
        ensure!(
            frame.geometry() == self.front.geometry(),
            "frame geometry {:?} does not match display {:?}",
            frame.geometry(),
            self.front.geometry()
        );
        self.front.clone_from(frame);
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::make_color;

    #[test]
    fn present_copies_whole_frame() {
        let mut display = MemoryDisplay::new(FrameGeometry::new(4, 4, 12, 5));
        let mut frame = display.create_buffer();
        let c = make_color(31, 0, 10);
        frame.draw_pixel(3, 3, c);

        display.present(&frame).unwrap();
        assert_eq!(display.frames_presented(), 1);
        assert_eq!(display.pixel(3, 3), Some(c));
        assert_eq!(display.front().as_bytes(), frame.as_bytes());
    }

    #[test]
    fn present_is_full_frame_not_incremental() {
        let mut display = MemoryDisplay::new(FrameGeometry::packed(4, 4));
        let mut frame = display.create_buffer();
        frame.draw_pixel(0, 0, make_color(1, 1, 1));
        display.present(&frame).unwrap();

        frame.clear();
        display.present(&frame).unwrap();
        assert_eq!(display.pixel(0, 0), Some(PackedColor::BLACK));
        assert_eq!(display.frames_presented(), 2);
    }

    #[test]
    fn present_rejects_mismatched_geometry() {
        let mut display = MemoryDisplay::new(FrameGeometry::packed(4, 4));
        let frame = Surface::new(FrameGeometry::packed(8, 4));
        assert!(display.present(&frame).is_err());
        assert_eq!(display.frames_presented(), 0);
    }
}
