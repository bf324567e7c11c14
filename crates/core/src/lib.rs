//! Rasterizer core - pure, deterministic, and testable
//!
//! This crate contains the pixel surface, the shape rasterizer, and the
//! presentation contract. It has **no dependencies** on devices or terminals,
//! so every drawing rule can be exercised against plain memory:
//!
//! - **Integer only**: no floating point anywhere in the drawing path
//! - **Clipping at the pixel**: shapes may compute coordinates outside the
//!   surface; out-of-range writes are dropped silently
//! - **One primitive**: rounded rectangles and diamonds decompose into lines
//!
//! # Module Structure
//!
//! - [`surface`]: off-screen RGB565 buffer with bounds-checked writes
//! - [`raster`]: Bresenham lines, rounded rectangles, diamonds
//! - [`present`]: the [`Present`] trait and an in-memory display
//!
//! # Example
//!
//! ```
//! use cotton_core::{draw_line, MemoryDisplay, Present, Surface};
//! use cotton_types::{FrameGeometry, Palette};
//!
//! let mut display = MemoryDisplay::new(FrameGeometry::packed(32, 32));
//! let mut frame = Surface::new(display.geometry());
//!
//! draw_line(&mut frame, 0, 0, 31, 31, Palette::White.color());
//! display.present(&frame).unwrap();
//!
//! assert_eq!(display.pixel(15, 15), Some(Palette::White.color()));
//! ```

pub mod present;
pub mod raster;
pub mod surface;

pub use cotton_types as types;

pub use present::{MemoryDisplay, Present};
pub use raster::{draw_diamond, draw_line, draw_rounded_rect};
pub use surface::{allocate_surface, clear, draw_pixel, Surface};
