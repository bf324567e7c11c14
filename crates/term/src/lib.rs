//! Framebuffer presentation module.
//!
//! This is the device side of the renderer: it opens a Linux framebuffer,
//! maps its pixel memory, switches the controlling terminal into raw mode,
//! and copies finished off-screen frames onto the mapping.
//!
//! Goals:
//! - Fail before touching the terminal when the device is unusable
//! - Release the mapping and restore the terminal on every exit path
//! - Present whole frames only (no dirty rectangles)

pub mod config;
pub mod fbdev;
pub mod session;

pub use cotton_core as core;
pub use cotton_types as types;

pub use config::SessionConfig;
pub use fbdev::{ScreenInfo, FBIOGET_FSCREENINFO, FBIOGET_VSCREENINFO};
pub use session::{DisplayError, DisplaySession};
