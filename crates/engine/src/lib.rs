//! Control engine - sprite state, scene composition, and the tick loop
//!
//! This crate connects input to pixels:
//!
//! - [`state`]: the eye/pupil state machine driven by [`Command`]s
//! - [`scene`]: draws the sprite with the rasterizer primitives
//! - [`controller`]: polls keys, redraws on change, presents every tick
//!
//! It only talks to the display through [`Present`], so the whole loop runs
//! against a [`MemoryDisplay`] in tests.
//!
//! # Example
//!
//! ```
//! use cotton_core::MemoryDisplay;
//! use cotton_engine::{Controller, LoopConfig, LoopState};
//! use cotton_types::FrameGeometry;
//!
//! let display = MemoryDisplay::new(FrameGeometry::packed(640, 480));
//! let mut controller = Controller::new(display, LoopConfig::default()).unwrap();
//!
//! assert_eq!(controller.tick(Some('j')).unwrap(), LoopState::Running);
//! assert!(controller.state().left_eye_closed);
//! assert_eq!(controller.tick(Some('q')).unwrap(), LoopState::Exiting);
//! ```
//!
//! [`Command`]: cotton_types::Command
//! [`Present`]: cotton_core::Present
//! [`MemoryDisplay`]: cotton_core::MemoryDisplay

pub mod config;
pub mod controller;
pub mod scene;
pub mod state;

pub use cotton_core as core;
pub use cotton_input as input;
pub use cotton_types as types;

pub use config::LoopConfig;
pub use controller::{Controller, LoopState};
pub use state::{ControlState, Transition};
