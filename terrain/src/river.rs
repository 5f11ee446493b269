//! Which cells a river covers.

use std::f64::consts::TAU;

use glam::{ivec2, IVec2};
use util::Rect;

use crate::River;

/// Horizontal swing of a curved river's course, in cells.
pub const CURVE_AMPLITUDE: f64 = 20.0;

impl River {
    /// Whether the cell is part of the river.
    pub fn contains(&self, p: IVec2) -> bool {
        let (a, b): (IVec2, IVec2) = (self.from.into(), self.to.into());
        if self.curved {
            on_curved_river(p, a, b, self.width)
        } else {
            on_straight_river(p, a, b, self.width)
        }
    }

    /// Cells that may be covered by the river.
    pub fn bounds(&self) -> Rect {
        let mut margin = ivec2(self.width, self.width) + 1;
        if self.curved {
            margin.x += CURVE_AMPLITUDE.ceil() as i32;
        }
        Rect::bounding(IVec2::from(self.from), IVec2::from(self.to))
            .grow(margin)
    }
}

/// Whether `p` lies on a straight river between `a` and `b`.
///
/// The cell must be within `width` of the line through the endpoints and
/// project onto the segment between them.
pub fn on_straight_river(p: IVec2, a: IVec2, b: IVec2, width: i32) -> bool {
    let (p, a, b) = (p.as_i64vec2(), a.as_i64vec2(), b.as_i64vec2());

    // Line in the form Ax + By + C = 0.
    let line_a = b.y - a.y;
    let line_b = a.x - b.x;
    let line_c = b.x * a.y - a.x * b.y;

    if line_a == 0 && line_b == 0 {
        return false;
    }

    let distance = (line_a * p.x + line_b * p.y + line_c).abs() as f64
        / ((line_a * line_a + line_b * line_b) as f64).sqrt();

    let d = b - a;
    let squared_length = d.length_squared();
    if squared_length == 0 {
        return distance <= width as f64;
    }

    let t = (p - a).dot(d) as f64 / squared_length as f64;
    distance <= width as f64 && (0.0..=1.0).contains(&t)
}

/// Whether `p` lies on a meandering river between `a` and `b`.
///
/// The course swings sideways along a full sine period as it progresses
/// vertically from one end to the other. Horizontal rivers are straight.
pub fn on_curved_river(p: IVec2, a: IVec2, b: IVec2, width: i32) -> bool {
    if a.y == b.y {
        return on_straight_river(p, a, b, width);
    }

    let progress = (p.y - a.y.min(b.y)) as f64 / (b.y - a.y).abs() as f64;
    if !(0.0..=1.0).contains(&progress) {
        return false;
    }

    let base_x = a.x as f64 + (b.x - a.x) as f64 * progress;
    let expected_x = base_x + (progress * TAU).sin() * CURVE_AMPLITUDE;

    (p.x as f64 - expected_x).abs() <= width as f64
}
