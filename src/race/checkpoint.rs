//! Circular checkpoints on the race loop

use crate::consts::CHECKPOINT_RADIUS;
use crate::geom::{Circle, Point, Vector};

/// A waypoint that must be traversed in loop order.
///
/// The capture area is wider than a pod's own body, so a pod counts as
/// through the moment any part of its travel clips the circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    index: usize,
    area: Circle,
}

impl Checkpoint {
    pub fn new(index: usize, position: Point) -> Self {
        Self {
            index,
            area: Circle::new(position, CHECKPOINT_RADIUS),
        }
    }

    /// Position in the ordered loop, 0-based
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Center of the capture area; also the steering target
    #[inline]
    pub fn position(&self) -> Point {
        self.area.center()
    }

    /// Whether a one-tick travel segment reaches this checkpoint.
    ///
    /// Segment collision, not endpoint containment: a fast pod can sweep
    /// across the capture area without its end position landing inside.
    pub fn is_reached_by(&self, travel: &Vector) -> bool {
        self.area.has_collision(travel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn travel(x1: i64, y1: i64, x2: i64, y2: i64) -> Vector {
        Vector::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_new_sets_index_and_position() {
        for (index, x, y) in [(0, 0, 0), (1, 1, 1)] {
            let checkpoint = Checkpoint::new(index, Point::new(x, y));
            assert_eq!(checkpoint.index(), index);
            assert_eq!(checkpoint.position(), Point::new(x, y));
        }
    }

    #[test]
    fn test_travel_clear_of_the_area_misses() {
        let checkpoint = Checkpoint::new(0, Point::ORIGIN);
        assert!(!checkpoint.is_reached_by(&travel(601, 601, -601, 601)));
    }

    #[test]
    fn test_travel_crossing_the_area_reaches() {
        let checkpoint = Checkpoint::new(0, Point::ORIGIN);
        assert!(checkpoint.is_reached_by(&travel(601, 200, -601, 200)));
    }

    #[test]
    fn test_travel_on_a_crossing_line_but_short_misses() {
        let checkpoint = Checkpoint::new(0, Point::ORIGIN);
        assert!(!checkpoint.is_reached_by(&travel(610, 200, 601, 200)));
    }

    #[test]
    fn test_travel_fully_inside_reaches() {
        let checkpoint = Checkpoint::new(0, Point::ORIGIN);
        assert!(checkpoint.is_reached_by(&travel(100, 100, -100, 100)));
    }

    #[test]
    fn test_travel_ending_or_starting_inside_reaches() {
        let checkpoint = Checkpoint::new(0, Point::ORIGIN);
        assert!(checkpoint.is_reached_by(&travel(590, 0, -601, 0)));
        assert!(checkpoint.is_reached_by(&travel(601, 0, -590, 0)));
    }
}
