//! Per-turn output commands

use std::fmt;

use crate::consts::MAX_THRUST;
use crate::geom::Point;

/// One output line for one pod: where to steer and what to do on the way.
///
/// The thrust policy only ever accelerates; `Shield` stays in the vocabulary
/// for the defensive play the wire format supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Thrust toward `target` at `power`
    Accelerate { target: Point, power: i64 },
    /// Raise the shield while drifting toward `target`
    Shield { target: Point },
}

impl Command {
    /// Accelerate command with the power clamped into the legal range
    pub fn accelerate(target: Point, power: i64) -> Self {
        Command::Accelerate {
            target,
            power: power.clamp(0, MAX_THRUST),
        }
    }

    pub fn shield(target: Point) -> Self {
        Command::Shield { target }
    }

    /// Steering target carried by the command
    pub fn target(&self) -> Point {
        match *self {
            Command::Accelerate { target, .. } | Command::Shield { target } => target,
        }
    }
}

impl fmt::Display for Command {
    /// Wire form: `x y power` or `x y SHIELD`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Command::Accelerate { target, power } => write!(f, "{} {}", target, power),
            Command::Shield { target } => write!(f, "{} SHIELD", target),
        }
    }
}
