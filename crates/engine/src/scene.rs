//! Cotton, drawn from rasterizer primitives.
//!
//! ```text
//!     _     _
//!    ||____||
//!   // o  o \\
//!   \\_____//
//! ```
//!
//! Coordinates assume a screen of at least 640x480; anything outside the
//! surface is clipped.

use crate::core::{draw_diamond, draw_line, draw_rounded_rect, Surface};
use crate::state::ControlState;
use crate::types::Palette;

pub const LEFT_EYE: (i32, i32) = (260, 300);
pub const RIGHT_EYE: (i32, i32) = (380, 300);

const EYE_SIZE: (i32, i32) = (100, 60);
const PUPIL_SIZE: (i32, i32) = (10, 30);
/// How far a pupil moves per step.
pub const PUPIL_OFFSET: i32 = 15;
/// A closed eye is the red eye covered by a white one shifted up this much.
const LID_SHIFT: i32 = 10;

/// Draw the full sprite with open eyes and centred pupils.
pub fn draw_cotton(surface: &mut Surface) {
    let purple = Palette::Purple.color();
    let white = Palette::White.color();
    let red = Palette::Red.color();

    surface.draw_pixel(150, 200, purple);

    // head
    draw_rounded_rect(surface, 150, 200, 490, 440, 30, purple);
    draw_rounded_rect(surface, 190, 240, 450, 400, 30, white);

    // ears
    draw_rounded_rect(surface, 180, 230, 260, 20, 15, purple);
    draw_rounded_rect(surface, 460, 230, 380, 20, 15, purple);

    for (x, y) in [LEFT_EYE, RIGHT_EYE] {
        draw_diamond(surface, x, y, EYE_SIZE.0, EYE_SIZE.1, red);
    }

    // eyelashes
    for i in 0..6 {
        for (x, y) in [LEFT_EYE, RIGHT_EYE] {
            draw_line(surface, x + i, y - i, x + 40 + i, y + 30, red);
            draw_line(surface, x - i, y - i, x - 40 - i, y + 30, red);
            draw_line(surface, x - 3 + i, y + 10, x - 3 + i, y + 40, red);
        }
    }

    for (x, y) in [LEFT_EYE, RIGHT_EYE] {
        draw_diamond(surface, x, y, PUPIL_SIZE.0, PUPIL_SIZE.1, Palette::Black.color());
    }
}

/// Redraw both eyes for `state`.
pub fn update_cotton(surface: &mut Surface, state: &ControlState) {
    draw_eye(surface, LEFT_EYE, state.left_eye_closed, state);
    draw_eye(surface, RIGHT_EYE, state.right_eye_closed, state);
}

fn draw_eye(surface: &mut Surface, (x, y): (i32, i32), closed: bool, state: &ControlState) {
    draw_diamond(surface, x, y, EYE_SIZE.0, EYE_SIZE.1, Palette::Red.color());
    if closed {
        draw_diamond(surface, x, y - LID_SHIFT, EYE_SIZE.0, EYE_SIZE.1, Palette::White.color());
    } else {
        let px = x + state.pupil_h as i32 * PUPIL_OFFSET;
        let py = y + state.pupil_v as i32 * PUPIL_OFFSET;
        draw_diamond(surface, px, py, PUPIL_SIZE.0, PUPIL_SIZE.1, Palette::Black.color());
    }
}
