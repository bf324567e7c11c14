//! Shape rasterizer.
//!
//! Everything here is built on [`draw_line`]; filled shapes are drawn as
//! dense runs of lines. Coordinates are widened to `i64` internally, and
//! only the steps, rows and fans that can reach the surface are walked.

use crate::surface::Surface;
use crate::types::PackedColor;

/// Draw a line using Bresenham's algorithm.
///
/// Both endpoints are plotted. Integer arithmetic only; the error term
/// combines both axes (`dy` is kept negative). Any `i32` endpoints are
/// accepted: the walk starts at the first step that lands on the surface
/// and stops after the last, so far off-screen spans cost nothing.
pub fn draw_line(surface: &mut Surface, x1: i32, y1: i32, x2: i32, y2: i32, color: PackedColor) {
    line(surface, x1.into(), y1.into(), x2.into(), y2.into(), color);
}

fn line(surface: &mut Surface, x1: i64, y1: i64, x2: i64, y2: i64, color: PackedColor) {
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };

    // The major axis advances on every step, so its visible span bounds
    // the walk.
    let (first, last, nx, ny) = if dx >= -dy {
        let Some((first, last)) = visible_steps(x1, sx, dx, surface.width()) else {
            return;
        };
        (first, last, first, minor_steps(first, dx, -dy))
    } else {
        let Some((first, last)) = visible_steps(y1, sy, -dy, surface.height()) else {
            return;
        };
        (first, last, minor_steps(first, -dy, dx), first)
    };

    let mut x = x1 + sx * nx;
    let mut y = y1 + sy * ny;
    // Error term after `nx` x-steps and `ny` y-steps from the start. It
    // stays within a small multiple of the extents; the products do not.
    let mut err = (i128::from(dx) * i128::from(1 + ny) + i128::from(dy) * i128::from(1 + nx)) as i64;

    for _ in first..=last {
        if let (Ok(px), Ok(py)) = (i32::try_from(x), i32::try_from(y)) {
            surface.draw_pixel(px, py, color);
        }

        if x == x2 && y == y2 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Range of major-axis steps `0..=extent` whose coordinate lies in
/// `0..limit`.
fn visible_steps(start: i64, step: i64, extent: i64, limit: u32) -> Option<(i64, i64)> {
    let limit = i64::from(limit);
    let (lo, hi) = if step > 0 {
        (-start, limit - 1 - start)
    } else {
        (start - (limit - 1), start)
    };
    let (lo, hi) = (lo.max(0), hi.min(extent));
    (lo <= hi).then_some((lo, hi))
}

/// Minor-axis steps taken after `n` major-axis steps.
fn minor_steps(n: i64, major: i64, minor: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let n = i128::from(n);
    let (major, minor) = (i128::from(major), i128::from(minor));
    ((2 * minor * n + major) / (2 * major)) as i64
}

/// Fill a rectangle whose top and bottom corners are chamfered by `round`
/// pixels.
///
/// Corners are normalized first, so any two opposite corners work. Each of
/// the `height` scanlines (row `y2` itself is not filled) is inset by
/// `round - i` near the top and `i - (height - round)` near the bottom; a
/// `round` of zero or less gives a plain rectangle. When `round` exceeds
/// half the height the two tapers overlap, and a row inset past the middle
/// is drawn with its ends swapped.
pub fn draw_rounded_rect(
    surface: &mut Surface,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    round: i32,
    color: PackedColor,
) {
    let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
    let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
    let (x1, y1, round) = (i64::from(x1), i64::from(y1), i64::from(round));

    let width = i64::from(x2) - x1;
    let height = i64::from(y2) - y1;

    // Rows off the surface plot nothing.
    let top = (-y1).max(0);
    let bottom = height.min(i64::from(surface.height()) - y1);

    for i in top..bottom {
        let r = if i < round {
            round - i
        } else if i > height - round {
            i - (height - round)
        } else {
            0
        };
        line(surface, x1 + r, y1 + i, x1 + width - r, y1 + i, color);
    }
}

/// Draw a diamond centred on `(x, y)` as four fans of radial lines.
///
/// Half-extents are `width / 2` and `height / 2` (truncated). The step
/// counter runs to the larger half-extent and each axis stops growing at its
/// own half-extent, so unequal extents leave a clamped fan rather than an
/// exact rhombus. A diamond whose half-extents are both zero draws nothing.
pub fn draw_diamond(surface: &mut Surface, x: i32, y: i32, width: i32, height: i32, color: PackedColor) {
    let (x, y) = (i64::from(x), i64::from(y));
    let half_w = i64::from(width / 2);
    let half_h = i64::from(height / 2);
    let size = half_w.max(half_h);

    let (reach_x, reach_y) = (half_w.max(0), half_h.max(0));
    if x + reach_x < 0
        || y + reach_y < 0
        || x - reach_x >= i64::from(surface.width())
        || y - reach_y >= i64::from(surface.height())
    {
        return;
    }

    let mut xi = 0;
    let mut yi = 0;
    for _ in 0..size {
        line(surface, x + xi, y, x, y + yi, color);
        line(surface, x + xi, y, x, y - yi, color);
        line(surface, x - xi, y, x, y + yi, color);
        line(surface, x - xi, y, x, y - yi, color);
        if xi < half_w {
            xi += 1;
        }
        if yi < half_h {
            yi += 1;
        }
    }
}
