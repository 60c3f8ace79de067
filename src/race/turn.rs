//! Turn-by-turn thrust decision
//!
//! Stateless classification, selected fresh every turn: the course curvature
//! just beyond the next checkpoint is banded, and each band maps to a thrust
//! constant. No mode is carried between turns.

use crate::consts::MAX_THRUST;
use crate::geom::{Angle, Vector};

use super::{Checkpoint, Command, Pod};

/// Curvature band for the course just beyond the next checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnBand {
    /// Near-straight continuation
    Gentle,
    Moderate,
    Sharp,
    /// Very sharp turn, up to a full reversal
    Hairpin,
}

impl TurnBand {
    /// Band for a turn angle in rounded degrees. First match wins; 180 means
    /// the course continues straight, 0 means it doubles back.
    pub fn classify(turn_angle: i64) -> Self {
        if turn_angle > 135 {
            TurnBand::Gentle
        } else if turn_angle > 90 {
            TurnBand::Moderate
        } else if turn_angle > 45 {
            TurnBand::Sharp
        } else {
            TurnBand::Hairpin
        }
    }

    /// Thrust applied while in this band
    pub fn thrust(self) -> i64 {
        match self {
            TurnBand::Gentle => MAX_THRUST,
            TurnBand::Moderate => 190,
            TurnBand::Sharp => 150,
            TurnBand::Hairpin => 100,
        }
    }
}

/// Pick this turn's command for `pod`: accelerate toward the next checkpoint,
/// with power scaled down by how sharply the course bends right after it.
pub fn decide(pod: &Pod, next: &Checkpoint, following: &Checkpoint) -> Command {
    // A stationary pod must get moving regardless of upcoming curvature
    // (the race start, or a dead stop after contact).
    if pod.velocity.norm() == 0.0 {
        return Command::accelerate(next.position(), MAX_THRUST);
    }

    let approach = Vector::new(pod.position, next.position());
    let exit = Vector::new(next.position(), following.position());
    let band = match Angle::between(&approach, &exit) {
        Some(turn) => TurnBand::classify(turn.degrees()),
        // A leg of the course collapsed to a point: assume the worst turn
        // rather than overshoot it.
        None => TurnBand::Hairpin,
    };
    log::debug!(
        "pod at {} -> checkpoint {}: {:?}, thrust {}",
        pod.position,
        next.index(),
        band,
        band.thrust()
    );
    Command::accelerate(next.position(), band.thrust())
}
