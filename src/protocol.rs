//! Wire formats between the bot and the game host
//!
//! Everything crossing the process boundary is a line of whitespace-separated
//! integers:
//! - setup: one lap-count line, one checkpoint-count line, then `x y` per
//!   checkpoint
//! - per turn, per pod: `x y vx vy angle nextCheckpointId`
//! - output, per player pod: `x y power` or `x y SHIELD` (rendered by
//!   [`crate::race::Command`])
//!
//! Malformed lines are rejected here, at the boundary; nothing further in
//! recovers from a format error.

use std::str::FromStr;

use anyhow::{Context, Result, bail};

use crate::geom::Point;

/// One pod's observed state for the turn, exactly as the host reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PodTelemetry {
    pub x: i64,
    pub y: i64,
    pub vx: i64,
    pub vy: i64,
    /// Facing angle in degrees
    pub angle: i64,
    /// Index of the checkpoint the pod must reach next
    pub next_checkpoint_id: usize,
}

impl FromStr for PodTelemetry {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let fields = parse_fields(line, 6)
            .with_context(|| format!("pod telemetry line {line:?}"))?;
        Ok(Self {
            x: fields[0],
            y: fields[1],
            vx: fields[2],
            vy: fields[3],
            angle: fields[4],
            next_checkpoint_id: usize::try_from(fields[5])
                .context("checkpoint id must be non-negative")?,
        })
    }
}

/// Parse a checkpoint definition line: `x y`
pub fn parse_point(line: &str) -> Result<Point> {
    let fields = parse_fields(line, 2).with_context(|| format!("checkpoint line {line:?}"))?;
    Ok(Point::new(fields[0], fields[1]))
}

/// Parse a single-count line (laps, checkpoint count)
pub fn parse_count(line: &str) -> Result<u32> {
    let fields = parse_fields(line, 1).with_context(|| format!("count line {line:?}"))?;
    u32::try_from(fields[0]).context("count must be non-negative")
}

/// Split a line into exactly `expected` integers
fn parse_fields(line: &str, expected: usize) -> Result<Vec<i64>> {
    if line.trim().is_empty() {
        bail!("empty input line");
    }
    let fields = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("non-numeric token {token:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    if fields.len() != expected {
        bail!("expected {} fields, got {}", expected, fields.len());
    }
    Ok(fields)
}
