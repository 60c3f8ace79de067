//! Turn deviation between consecutive legs of travel

use super::{Point, Vector};

/// How far a second leg of travel deviates from doubling back on the first.
///
/// 0° means the second leg reverses the first exactly; 180° means it
/// continues straight ahead. The sign convention matters: thrust bands
/// downstream treat large values as "near straight".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Angle {
    degrees: i64,
}

impl Angle {
    /// Angle between two vectors, where `v2` follows on from `v1`.
    ///
    /// `None` when either vector has zero norm: no direction, no angle.
    /// That is a valid outcome callers branch on, not an error.
    pub fn between(v1: &Vector, v2: &Vector) -> Option<Angle> {
        let (n1, n2) = (v1.norm(), v2.norm());
        if n1 == 0.0 || n2 == 0.0 {
            return None;
        }
        // Clamp against float drift pushing the ratio just past ±1.
        let ratio = (-(v1.scalar(v2) as f64) / (n1 * n2)).clamp(-1.0, 1.0);
        let degrees = ratio.acos().to_degrees().round() as i64;
        Some(Angle { degrees })
    }

    /// Angle turned at `through` on the path `initial -> through -> target`
    pub fn from_path(initial: Point, through: Point, target: Point) -> Option<Angle> {
        Angle::between(
            &Vector::new(initial, through),
            &Vector::new(through, target),
        )
    }

    /// Rounded value in degrees, in [0, 180]
    #[inline]
    pub fn degrees(&self) -> i64 {
        self.degrees
    }
}
