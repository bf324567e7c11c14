//! Key mapping from terminal events to raw characters and commands.

use crate::types::{Command, KEY_ETX};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Reduce a key event to the single byte a raw terminal would have sent.
///
/// Only presses of plain character keys are reported. Ctrl-C becomes ETX so
/// it can still end the program once raw mode has disabled SIGINT.
pub fn key_to_char(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KEY_ETX)
        }
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(ch)
        }
        _ => None,
    }
}

/// Map a polled key to a control command.
pub fn command_for_key(key: Option<char>) -> Option<Command> {
    key.and_then(Command::from_key)
}
