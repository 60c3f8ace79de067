//! Circles and circle-segment collision
//!
//! The collision test works on the one-tick travel segment, not the end
//! position: a fast mover can cross a circle entirely within a single tick
//! and must still register the hit.

use super::{Point, Vector};

/// A circular area with a strictly positive radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Panics if `radius` is not strictly positive; that is a programming
    /// error, not a recoverable state.
    pub fn new(center: Point, radius: f64) -> Self {
        assert!(radius > 0.0, "circle radius must be strictly positive");
        Self { center, radius }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether `point` lies within the circle (boundary included)
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance_to(point) <= self.radius
    }

    /// Whether `segment` crosses or touches the circle.
    ///
    /// Check order is load-bearing: line distance first, then whether the
    /// perpendicular foot falls inside the segment, and only then the
    /// endpoint-inside fallback (a segment that starts or ends inside the
    /// circle with its foot beyond an endpoint).
    pub fn has_collision(&self, segment: &Vector) -> bool {
        let norm = segment.norm();
        if norm == 0.0 {
            // Zero-length segment: only its single point can be inside.
            return self.contains(segment.origin());
        }

        let to_center = Vector::new(segment.origin(), self.center);
        let line_distance = (segment.cross(&to_center) as f64).abs() / norm;
        if line_distance > self.radius {
            return false;
        }

        // The center projects forward from both endpoints exactly when the
        // perpendicular foot lies between them.
        let from_target = Vector::new(segment.target(), self.center);
        if segment.scalar(&to_center) >= 0 && segment.opposite().scalar(&from_target) >= 0 {
            return true;
        }

        self.contains(segment.origin()) || self.contains(segment.target())
    }
}
