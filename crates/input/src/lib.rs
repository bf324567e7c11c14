//! Terminal input module.
//!
//! This module is intentionally independent of rendering. It reads single
//! keys from the controlling terminal without blocking, maps `crossterm` key
//! events to the raw characters a raw-mode terminal would deliver, and
//! provides the loop's pacing sleep.

pub mod map;
pub mod poll;

pub use cotton_types as types;

pub use map::{command_for_key, key_to_char};
pub use poll::{sleep_ms, KeySource, ScriptedKeys, TerminalKeys};
