//! Off-screen pixel surface.
//!
//! A `Surface` is a byte buffer laid out exactly like the hardware
//! framebuffer (`stride * rows` bytes, 2 bytes per pixel), so presenting it
//! is a straight byte copy.

use crate::types::{FrameGeometry, PackedColor, BYTES_PER_PIXEL};

/// Zero-initialized RGB565 buffer addressed by `x * 2 + y * stride`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    geometry: FrameGeometry,
    bytes: Vec<u8>,
}

impl Surface {
    /// Allocate a black surface for `geometry`.
    ///
    /// Callers that present to a device must pass the device's own geometry;
    /// presentation assumes both sides have the same `stride` and `rows`.
    pub fn new(geometry: FrameGeometry) -> Self {
        Self {
            geometry,
            bytes: vec![0; geometry.byte_len()],
        }
    }

    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Write `color` at `(x, y)`; a no-op outside `[0, width) x [0, height)`.
    #[inline]
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: PackedColor) {
        if let Some(i) = self.geometry.offset(x, y) {
            self.bytes[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_ne_bytes());
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<PackedColor> {
        self.geometry.offset(x, y).map(|i| {
            PackedColor::from_raw(u16::from_ne_bytes([self.bytes[i], self.bytes[i + 1]]))
        })
    }

    /// Zero every byte, padding included.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Number of visible pixels holding `color`.
    pub fn count_color(&self, color: PackedColor) -> usize {
        let mut n = 0;
        for y in 0..self.geometry.height as i32 {
            for x in 0..self.geometry.width as i32 {
                if self.pixel(x, y) == Some(color) {
                    n += 1;
                }
            }
        }
        n
    }
}

/// Allocate an off-screen surface matching a display's geometry.
pub fn allocate_surface(geometry: FrameGeometry) -> Surface {
    Surface::new(geometry)
}

pub fn draw_pixel(surface: &mut Surface, x: i32, y: i32, color: PackedColor) {
    surface.draw_pixel(x, y, color);
}

pub fn clear(surface: &mut Surface) {
    surface.clear();
}
