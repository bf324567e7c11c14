//! Non-blocking key polling and loop pacing.

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{self, Event};

use crate::map::key_to_char;

/// Source of single raw keys.
pub trait KeySource {
    /// Return the next pending key without blocking, or `None` when nothing
    /// is waiting.
    fn poll_key(&mut self) -> Option<char>;
}

/// Keys read from the controlling terminal.
///
/// The terminal should already be in raw mode so presses arrive unbuffered
/// and unechoed; the display session takes care of that.
#[derive(Debug, Default)]
pub struct TerminalKeys {
    _private: (),
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySource for TerminalKeys {
    fn poll_key(&mut self) -> Option<char> {
        // Transient read failures are treated like an idle keyboard.
        match event::poll(Duration::ZERO) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                log::debug!("key poll failed: {err}");
                return None;
            }
        }

        match event::read() {
            Ok(Event::Key(key)) => key_to_char(key),
            Ok(_) => None,
            Err(err) => {
                log::debug!("key read failed: {err}");
                None
            }
        }
    }
}

/// Pre-recorded keys, one per poll; `None` entries model idle ticks.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Option<char>>,
}

impl ScriptedKeys {
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Option<char>>,
    {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Script that presses each character of `s` on consecutive polls.
    pub fn from_str(s: &str) -> Self {
        Self::new(s.chars().map(Some))
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Option<char> {
        self.keys.pop_front().flatten()
    }
}

/// Suspend the calling thread for `ms` milliseconds.
pub fn sleep_ms(ms: u64) {
    if ms > 0 {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_keys_yield_in_order_then_none() {
        let mut keys = ScriptedKeys::new([Some('a'), None, Some('q')]);
        assert_eq!(keys.poll_key(), Some('a'));
        assert_eq!(keys.poll_key(), None);
        assert_eq!(keys.poll_key(), Some('q'));
        assert_eq!(keys.remaining(), 0);
        assert_eq!(keys.poll_key(), None);
    }

    #[test]
    fn scripted_keys_from_str() {
        let mut keys = ScriptedKeys::from_str("jl");
        assert_eq!(keys.poll_key(), Some('j'));
        assert_eq!(keys.poll_key(), Some('l'));
        assert_eq!(keys.poll_key(), None);
    }

    #[test]
    fn sleep_zero_returns_immediately() {
        let start = std::time::Instant::now();
        sleep_ms(0);
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
