use std::time::Duration;

use crate::foundation::error::{ElfError, ElfResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Frame rate as a rational `num / den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames per `den` seconds.
    pub num: u32,
    /// Must be > 0.
    pub den: u32,
}

impl Fps {
    /// Create a validated frame rate.
    pub fn new(num: u32, den: u32) -> ElfResult<Self> {
        if den == 0 {
            return Err(ElfError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ElfError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of a single frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Duration of a single frame.
    pub fn frame_duration(self) -> Duration {
        Duration::from_nanos(1_000_000_000 * u64::from(self.den) / u64::from(self.num))
    }
}

/// Pixel (or design-unit) dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl Canvas {
    /// Multiply both dimensions by `factor`, rounding to the nearest pixel (min 1).
    pub fn scaled(self, factor: f64) -> Self {
        let scale = |v: u32| {
            let s = (f64::from(v) * finite_or(factor, 1.0).abs()).round();
            (s as u32).max(1)
        };
        Self {
            width: scale(self.width),
            height: scale(self.height),
        }
    }
}

/// Return `v` when finite, `fallback` otherwise.
pub(crate) fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
