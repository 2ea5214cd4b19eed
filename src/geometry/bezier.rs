//! Cubic bezier helpers used to orient limbs.

use crate::foundation::core::{Affine, Point, Vec2};

/// Direction (degrees, `0°` = +x, counter-clockwise towards +y) of the velocity of the cubic
/// bezier `start, c1, c2, end` at parameter `t`.
///
/// Uses `B'(t) = 3(1-t)²(c1-start) + 6(1-t)t(c2-c1) + 3t²(end-c2)`. A zero velocity yields `0°`
/// for positive zero components, and any non-finite result collapses to `0°`.
pub fn tangent_angle(start: Point, c1: Point, c2: Point, end: Point, t: f64) -> f64 {
    let d = bezier_velocity(start, c1, c2, end, t);
    let deg = d.y.atan2(d.x) * (180.0 / std::f64::consts::PI);
    if deg.is_finite() { deg } else { 0.0 }
}

fn bezier_velocity(start: Point, c1: Point, c2: Point, end: Point, t: f64) -> Vec2 {
    let mt = 1.0 - t;
    3.0 * mt * mt * (c1 - start) + 6.0 * mt * t * (c2 - c1) + 3.0 * t * t * (end - c2)
}

/// Affine transform scaling by `(scale_x, scale_y)` while keeping `pivot` fixed.
///
/// Serializes to `matrix(sx, 0, 0, sy, px - sx*px, py - sy*py)`.
pub fn scale_about_point(scale_x: f64, scale_y: f64, pivot: Point) -> Affine {
    Affine::new([
        scale_x,
        0.0,
        0.0,
        scale_y,
        pivot.x - scale_x * pivot.x,
        pivot.y - scale_y * pivot.y,
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bezier.rs"]
mod tests;
