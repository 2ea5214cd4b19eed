//! Arm construction: one cubic bezier from the shoulder plus the hand orientation at its end.

use crate::foundation::core::{BezPath, Point, finite_or};
use crate::geometry::bezier::tangent_angle;

/// Default arm angle in degrees.
pub const DEFAULT_ARM_ANGLE: f64 = 0.0;
/// Default shrug factor (body-side control point fully pulled out).
pub const DEFAULT_SHRUG: f64 = 1.0;
/// Default arm length in design units.
pub const DEFAULT_ARM_LENGTH: f64 = 120.0;

/// Derived geometry for one arm, in the arm's local frame (shoulder at the origin).
///
/// Left and right arms share this shape; the scene mirrors it with a reflection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmGeometry {
    /// Control point next to the shoulder.
    pub body_control: Point,
    /// Control point next to the hand.
    pub hand_control: Point,
    /// End of the path (the wrist).
    pub end: Point,
    /// Base length after the sideways/backwards shortening.
    pub effective_length: f64,
    /// Rotation in degrees applied to the hand so it sits across the wrist.
    pub hand_rotation_deg: f64,
}

impl ArmGeometry {
    /// Ratio of [`Self::effective_length`] to the requested base length, `(sin(angle) + 1) / 2`.
    pub fn length_factor(angle_deg: f64) -> f64 {
        let rads = finite_or(angle_deg, DEFAULT_ARM_ANGLE).to_radians();
        (rads.sin() + 1.0) / 2.0
    }

    /// The arm as a single cubic segment from the origin.
    pub fn path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(Point::ORIGIN);
        path.curve_to(self.body_control, self.hand_control, self.end);
        path
    }
}

impl Default for ArmGeometry {
    fn default() -> Self {
        build_arm(DEFAULT_ARM_ANGLE, DEFAULT_SHRUG, DEFAULT_ARM_LENGTH)
    }
}

/// Build one arm.
///
/// The length is scaled by `(sin(angle) + 1) / 2`: an arm straight out to the side (90°) keeps
/// its full length, one swung back over the body (270°) collapses to zero. Non-finite input falls
/// back to the defaults and a negative length uses its magnitude, so the result is always finite.
/// `shrug` is not clamped.
pub fn build_arm(angle_deg: f64, shrug: f64, base_length: f64) -> ArmGeometry {
    let angle_deg = finite_or(angle_deg, DEFAULT_ARM_ANGLE);
    let shrug = finite_or(shrug, DEFAULT_SHRUG);
    let base_length = finite_or(base_length, DEFAULT_ARM_LENGTH).abs();

    let rads = angle_deg.to_radians();
    let length = base_length * ArmGeometry::length_factor(angle_deg);

    let body_control = Point::new(shrug * -length / 3.0, -4.0);
    let hand_control = Point::new(length * -0.75, 0.0);
    let end = Point::new(-(rads.sin() * length), rads.cos() * length);

    let hand_rotation_deg =
        tangent_angle(Point::ORIGIN, body_control, hand_control, end, 1.0) - 90.0;

    ArmGeometry {
        body_control,
        hand_control,
        end,
        effective_length: length,
        hand_rotation_deg,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/limb.rs"]
mod tests;
