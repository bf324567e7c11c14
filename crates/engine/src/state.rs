//! Eye and pupil state machine.

use crate::types::Command;

/// Pupils move at most one step from centre on each axis.
pub const PUPIL_LIMIT: i8 = 1;

/// Result of applying a command to the control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Leave the loop
    Exit,
    /// State changed; the sprite needs redrawing
    Changed,
    /// Command rejected or had no effect
    Unchanged,
}

/// What the sprite currently looks like.
///
/// Pupils look in at most one cardinal direction: an axis may only move
/// while the other one is centred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ControlState {
    pub left_eye_closed: bool,
    pub right_eye_closed: bool,
    pub pupil_h: i8,
    pub pupil_v: i8,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, command: Command) -> Transition {
        match command {
            Command::Quit => Transition::Exit,
            Command::ToggleLeftEye => {
                self.left_eye_closed = !self.left_eye_closed;
                Transition::Changed
            }
            Command::ToggleRightEye => {
                self.right_eye_closed = !self.right_eye_closed;
                Transition::Changed
            }
            Command::LookUp => Self::step(&mut self.pupil_v, self.pupil_h, -1),
            Command::LookDown => Self::step(&mut self.pupil_v, self.pupil_h, 1),
            Command::LookLeft => Self::step(&mut self.pupil_h, self.pupil_v, -1),
            Command::LookRight => Self::step(&mut self.pupil_h, self.pupil_v, 1),
        }
    }

    fn step(axis: &mut i8, other: i8, delta: i8) -> Transition {
        let next = *axis + delta;
        if other != 0 || next.abs() > PUPIL_LIMIT {
            return Transition::Unchanged;
        }
        *axis = next;
        Transition::Changed
    }
}
