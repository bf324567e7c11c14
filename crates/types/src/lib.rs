//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (rasterizer, scene composition, device presentation).
//!
//! # Pixel Format
//!
//! The display surface is 16 bits per pixel, RGB565, host-endian, row-major:
//!
//! | Bits | Channel |
//! |------|---------|
//! | 15..11 | red (0-31) |
//! | 10..5 | green (0-63) |
//! | 4..0 | blue (0-31) |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Control loop pacing interval |
//!
//! # Examples
//!
//! ```
//! use cotton_types::{make_color, Command, Palette};
//!
//! let white = make_color(31, 63, 31);
//! assert_eq!(white.raw(), 0xFFFF);
//! assert_eq!(Palette::try_from(1).unwrap().color(), white);
//!
//! assert_eq!(Command::from_key('q'), Some(Command::Quit));
//! assert_eq!(Command::from_key('x'), None);
//! ```

pub mod color;

pub use color::{make_color, PackedColor, Palette, UnknownColorId};

/// Bytes occupied by one packed pixel.
pub const BYTES_PER_PIXEL: usize = 2;

/// Bits per pixel the rasterizer writes.
pub const BITS_PER_PIXEL: u32 = 16;

/// Control loop pacing interval in milliseconds.
pub const TICK_MS: u64 = 100;

/// Raw byte a terminal in raw mode delivers for Ctrl-C.
pub const KEY_ETX: char = '\u{3}';

/// Layout of a pixel surface.
///
/// `width`/`height` are the visible resolution and bound pixel writes;
/// `stride`/`rows` size the backing buffer. A device may report a stride
/// larger than `width * BYTES_PER_PIXEL` and more virtual rows than visible
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
    pub stride: u32,
    pub rows: u32,
}

impl FrameGeometry {
    pub const fn new(width: u32, height: u32, stride: u32, rows: u32) -> Self {
        Self {
            width,
            height,
            stride,
            rows,
        }
    }

    /// Geometry with no row padding and no extra virtual rows.
    pub const fn packed(width: u32, height: u32) -> Self {
        Self::new(width, height, width * BYTES_PER_PIXEL as u32, height)
    }

    /// Total buffer size in bytes (`stride * rows`).
    pub const fn byte_len(&self) -> usize {
        self.stride as usize * self.rows as usize
    }

    /// Byte offset of pixel `(x, y)`, or `None` outside the visible area.
    #[inline(always)]
    pub fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let offset = x as usize * BYTES_PER_PIXEL + y as usize * self.stride as usize;
        if offset + BYTES_PER_PIXEL > self.byte_len() {
            return None;
        }
        Some(offset)
    }
}

/// Keyboard commands understood by the control loop.
///
/// Each command is bound to exactly one character (Quit also accepts
/// Ctrl-C, which a raw terminal delivers as ETX).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Clear the screen and leave the loop
    Quit,
    /// Open/close the left eye
    ToggleLeftEye,
    /// Open/close the right eye
    ToggleRightEye,
    /// Move pupils up one step
    LookUp,
    /// Move pupils left one step
    LookLeft,
    /// Move pupils down one step
    LookDown,
    /// Move pupils right one step
    LookRight,
}

impl Command {
    /// Map a single raw key to a command.
    ///
    /// Bindings are case-sensitive; anything unbound yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cotton_types::Command;
    ///
    /// assert_eq!(Command::from_key('j'), Some(Command::ToggleLeftEye));
    /// assert_eq!(Command::from_key('a'), Some(Command::LookLeft));
    /// assert_eq!(Command::from_key('J'), None);
    /// ```
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'q' | KEY_ETX => Some(Command::Quit),
            'j' => Some(Command::ToggleLeftEye),
            'l' => Some(Command::ToggleRightEye),
            'w' => Some(Command::LookUp),
            'a' => Some(Command::LookLeft),
            's' => Some(Command::LookDown),
            'd' => Some(Command::LookRight),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::ToggleLeftEye => "toggleLeftEye",
            Command::ToggleRightEye => "toggleRightEye",
            Command::LookUp => "lookUp",
            Command::LookLeft => "lookLeft",
            Command::LookDown => "lookDown",
            Command::LookRight => "lookRight",
        }
    }
}
