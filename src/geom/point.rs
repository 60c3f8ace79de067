//! Integer lattice points

use std::fmt;

use glam::DVec2;

use super::Vector;

/// A position on the race plane.
///
/// Coordinates are integers on the host's grid but can exceed 32-bit range,
/// so they are carried as `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Origin of the plane
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift this point in place by a vector's component deltas
    pub fn translate(&mut self, v: &Vector) {
        self.x += v.dx();
        self.y += v.dy();
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Float view for geometry that leaves the lattice
    #[inline]
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }
}

impl fmt::Display for Point {
    /// Wire form: `x y`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
