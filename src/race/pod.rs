//! Pod state and velocity integration
//!
//! A pod's observed fields are overwritten wholesale from telemetry every
//! turn; nothing simulated here ever overrides an observation. The physics
//! below exists for forward look-ahead only.

use crate::consts::DRAG_FACTOR;
use crate::geom::{Point, Vector};
use crate::protocol::PodTelemetry;

use super::Checkpoint;

/// One racing pod
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pod {
    /// Current position
    pub position: Point,
    /// Current velocity, anchored at the plane origin
    pub velocity: Vector,
    /// Facing angle in degrees, as reported by the host
    pub facing: i64,
    /// Index of the checkpoint to reach next
    pub next_checkpoint: usize,
    /// Current lap, starting at 1
    pub lap: u32,
}

impl Pod {
    pub fn new() -> Self {
        Self {
            position: Point::ORIGIN,
            velocity: Vector::from_components(0, 0),
            facing: 0,
            next_checkpoint: 0,
            lap: 1,
        }
    }

    /// Overwrite all observed state from this turn's telemetry.
    ///
    /// Returns `true` when the pod moved on to a new checkpoint.
    pub fn apply_telemetry(&mut self, telemetry: &PodTelemetry, checkpoint_count: usize) -> bool {
        let advanced = telemetry.next_checkpoint_id != self.next_checkpoint;
        let (next, lap) = advance_checkpoint(
            self.next_checkpoint,
            telemetry.next_checkpoint_id,
            checkpoint_count,
            self.lap,
        );
        self.position = Point::new(telemetry.x, telemetry.y);
        self.velocity = Vector::from_components(telemetry.vx, telemetry.vy);
        self.facing = telemetry.angle;
        self.next_checkpoint = next;
        self.lap = lap;
        advanced
    }

    /// The segment this pod sweeps over one tick at its current velocity
    pub fn travel_segment(&self) -> Vector {
        let mut predicted = self.position;
        predicted.translate(&self.velocity);
        Vector::new(self.position, predicted)
    }

    /// One-tick look-ahead: does the current travel segment cross the
    /// checkpoint's capture area?
    pub fn will_reach(&self, checkpoint: &Checkpoint) -> bool {
        checkpoint.is_reached_by(&self.travel_segment())
    }

    /// Velocity after one turn of thrust followed by drag.
    ///
    /// The impulse is assumed aligned with the current heading, which only
    /// holds for forward look-ahead. Drag truncates each component toward
    /// zero; the truncation must stay exact because the error compounds when
    /// this is applied over several predicted turns.
    pub fn next_speed(velocity: &Vector, power: i64) -> Vector {
        let impulse = Vector::from_polar(power as f64, velocity.alpha());
        let combined = velocity.sum(&impulse);
        let rad = combined.alpha().to_radians();
        let norm = combined.norm();
        Vector::from_components(
            (rad.cos() * norm * DRAG_FACTOR) as i64,
            (rad.sin() * norm * DRAG_FACTOR) as i64,
        )
    }
}

impl Default for Pod {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicit checkpoint/lap transition.
///
/// The new index always follows the observation. The lap advances exactly
/// when the observed index moves off the final checkpoint of the loop: the
/// pod has just crossed it and is heading back around. This is the sole
/// lap-tracking mechanism.
pub fn advance_checkpoint(
    current: usize,
    observed: usize,
    checkpoint_count: usize,
    lap: u32,
) -> (usize, u32) {
    let leaving_last = observed != current && current + 1 == checkpoint_count;
    let lap = if leaving_last { lap + 1 } else { lap };
    (observed, lap)
}
