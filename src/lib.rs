//! Pod Pilot - a per-turn bot for checkpoint-loop pod races
//!
//! Core modules:
//! - `geom`: 2D geometry kernel (points, vectors, circles, turn angles)
//! - `race`: pods, checkpoints, race state and the thrust policy
//! - `protocol`: telemetry/command wire formats
//!
//! The kernel is pure and deterministic: one full geometry + decision pass
//! per turn, no carried state besides the race objects, which are overwritten
//! wholesale from each turn's telemetry.

pub mod geom;
pub mod protocol;
pub mod race;

pub use geom::{Angle, Circle, Point, Vector};
pub use race::{Command, Pod, Race, TurnBand};

/// Game configuration constants
pub mod consts {
    /// Capture radius of a checkpoint
    pub const CHECKPOINT_RADIUS: f64 = 600.0;
    /// Body radius of a pod (smaller than the checkpoint capture radius)
    pub const POD_RADIUS: f64 = 400.0;

    /// Thrust bounds per turn
    pub const MAX_THRUST: i64 = 200;
    /// Fraction of velocity retained after drag is applied each turn
    pub const DRAG_FACTOR: f64 = 0.85;

    /// Pods driven by this bot
    pub const PLAYER_POD_COUNT: usize = 2;
    /// Opponent pods observed each turn
    pub const OPPONENT_POD_COUNT: usize = 2;
}
