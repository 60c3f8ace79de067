//! Anchored 2D vectors
//!
//! A vector keeps its origin: two vectors with equal displacement but
//! different anchor points are different values. Direction (`alpha`) is
//! computed with exact axis special cases because downstream thresholds
//! compare against rounded integer degrees.

use std::ops::Mul;

use glam::{DVec2, I64Vec2};

use super::Point;

/// A directed segment from `origin` to `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    origin: Point,
    target: Point,
}

impl Vector {
    pub fn new(origin: Point, target: Point) -> Self {
        Self { origin, target }
    }

    /// Displacement anchored at the origin of the plane
    pub fn from_components(dx: i64, dy: i64) -> Self {
        Self::new(Point::ORIGIN, Point::new(dx, dy))
    }

    /// Build from magnitude and direction in degrees, anchored at the origin
    /// of the plane. Components round to the nearest lattice step.
    pub fn from_polar(norm: f64, alpha: f64) -> Self {
        let rad = alpha.to_radians();
        Self::from_components(
            (rad.cos() * norm).round() as i64,
            (rad.sin() * norm).round() as i64,
        )
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    #[inline]
    pub fn dx(&self) -> i64 {
        self.target.x - self.origin.x
    }

    #[inline]
    pub fn dy(&self) -> i64 {
        self.target.y - self.origin.y
    }

    /// Displacement as an integer vector
    #[inline]
    pub fn delta(&self) -> I64Vec2 {
        I64Vec2::new(self.dx(), self.dy())
    }

    /// Euclidean length of the displacement
    pub fn norm(&self) -> f64 {
        DVec2::new(self.dx() as f64, self.dy() as f64).length()
    }

    /// Direction in degrees, in (-180, 180].
    ///
    /// The four axis-aligned directions return exactly 0, 90, -90 and 180.
    /// Everything else is an arctangent on magnitudes folded back into the
    /// right quadrant: the sign of `dx` picks the branch (+90 in the second
    /// quadrant) and a negative `dy` mirrors the result below the axis.
    pub fn alpha(&self) -> f64 {
        let (dx, dy) = (self.dx(), self.dy());
        if dy == 0 {
            return if dx >= 0 { 0.0 } else { 180.0 };
        }
        if dx == 0 {
            return if dy > 0 { 90.0 } else { -90.0 };
        }
        let folded = if dx > 0 {
            (dy.abs() as f64 / dx as f64).atan().to_degrees()
        } else {
            (-dx as f64 / dy.abs() as f64).atan().to_degrees() + 90.0
        };
        if dy < 0 { -folded } else { folded }
    }

    /// Dot product of the two displacements
    pub fn scalar(&self, other: &Vector) -> i64 {
        self.delta().dot(other.delta())
    }

    /// 2D cross product (perp-dot) of the two displacements
    pub fn cross(&self, other: &Vector) -> i64 {
        self.delta().perp_dot(other.delta())
    }

    /// Compose another displacement onto this one, keeping this vector's
    /// origin (an impulse added to an existing velocity).
    pub fn sum(&self, other: &Vector) -> Vector {
        let target = Point::new(self.target.x + other.dx(), self.target.y + other.dy());
        Vector::new(self.origin, target)
    }

    /// The same segment walked the other way
    pub fn opposite(&self) -> Vector {
        Vector::new(self.target, self.origin)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    /// Scale the magnitude, keeping direction and origin
    fn mul(self, factor: f64) -> Vector {
        let rad = self.alpha().to_radians();
        let norm = self.norm() * factor;
        let target = Point::new(
            self.origin.x + (rad.cos() * norm).round() as i64,
            self.origin.y + (rad.sin() * norm).round() as i64,
        );
        Vector::new(self.origin, target)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_from_components_anchors_at_plane_origin() {
        let v = Vector::from_components(1, 1);
        assert_eq!(v.origin(), Point::new(0, 0));
        assert_eq!(v.target(), Point::new(1, 1));
    }

    #[test]
    fn test_norm() {
        assert_eq!(Vector::from_components(0, 0).norm(), 0.0);
        for (x, y) in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
            assert_eq!(Vector::from_components(x, y).norm(), 1.0);
        }
        for (x, y) in [(1, 1), (-1, 1), (-1, -1), (1, -1)] {
            assert_relative_eq!(Vector::from_components(x, y).norm(), 2.0_f64.sqrt());
        }
    }

    #[test]
    fn test_deltas_from_two_points() {
        let ab = Vector::new(Point::new(2, -3), Point::new(3, 1));
        assert_eq!(ab.dx(), 1);
        assert_eq!(ab.dy(), 4);
    }

    #[test]
    fn test_scalar() {
        let a = Point::new(2, -3);
        let ab = Vector::new(a, Point::new(3, 1));
        let ac = Vector::new(a, Point::new(-1, 4));
        assert_eq!(ab.scalar(&ac), 25);
    }

    #[test]
    fn test_sum_keeps_left_origin() {
        let a = Point::new(0, 0);
        let ab = Vector::new(a, Point::new(0, 1));
        let ac = Vector::new(a, Point::new(1, 0));
        assert_eq!(ab.sum(&ac), Vector::new(a, Point::new(1, 1)));

        let ab = Vector::new(Point::new(1, 1), Point::new(2, 2));
        let cd = Vector::new(Point::new(-1, 0), Point::new(-3, 0));
        assert_eq!(ab.sum(&cd), Vector::new(Point::new(1, 1), Point::new(0, 2)));
    }

    #[test]
    fn test_equality_counts_the_anchor() {
        // Equal displacement, different origin: not the same vector.
        let anchored = Vector::new(Point::new(1, 1), Point::new(2, 2));
        let free = Vector::from_components(1, 1);
        assert_ne!(anchored, free);
        assert_eq!(free, Vector::from_components(1, 1));
    }

    #[test]
    fn test_opposite_swaps_endpoints() {
        let v = Vector::from_components(1, 1);
        assert_eq!(v.opposite(), Vector::new(Point::new(1, 1), Point::new(0, 0)));
    }

    #[test]
    fn test_scale_keeps_direction() {
        let v = Vector::from_polar(10.0, 45.0);
        assert_eq!(v * 3.0, Vector::from_polar(30.0, 45.0));
    }

    #[test]
    fn test_alpha_eight_directions() {
        let cases = [
            (1, 0, 0.0),
            (1, 1, 45.0),
            (0, 1, 90.0),
            (-1, 1, 135.0),
            (-1, 0, 180.0),
            (-1, -1, -135.0),
            (0, -1, -90.0),
            (1, -1, -45.0),
        ];
        for (x, y, expected) in cases {
            assert_eq!(Vector::from_components(x, y).alpha(), expected, "({x}, {y})");
        }
    }

    #[test]
    fn test_from_polar_axis_directions() {
        let cases = [
            (1.0, 0.0, 1, 0),
            (1.0, 90.0, 0, 1),
            (1.0, 180.0, -1, 0),
            (1.0, -90.0, 0, -1),
        ];
        for (norm, alpha, x, y) in cases {
            assert_eq!(Vector::from_polar(norm, alpha), Vector::from_components(x, y));
        }
    }

    #[test]
    fn test_from_polar_diagonal() {
        assert_eq!(
            Vector::from_polar(2.0_f64.sqrt(), 45.0),
            Vector::from_components(1, 1)
        );
    }

    proptest! {
        #[test]
        fn alpha_stays_in_half_open_range(dx in -10_000i64..10_000, dy in -10_000i64..10_000) {
            let alpha = Vector::from_components(dx, dy).alpha();
            prop_assert!(alpha > -180.0 && alpha <= 180.0);
        }

        #[test]
        fn alpha_agrees_with_atan2(dx in -10_000i64..10_000, dy in -10_000i64..10_000) {
            prop_assume!(dx != 0 || dy != 0);
            let alpha = Vector::from_components(dx, dy).alpha();
            let reference = (dy as f64).atan2(dx as f64).to_degrees();
            // Both conventions put pure -x at 180, everything else matches closely.
            prop_assert!((alpha - reference).abs() < 1e-9, "{alpha} vs {reference}");
        }
    }
}
