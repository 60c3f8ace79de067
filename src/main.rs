//! Pod Pilot entry point
//!
//! Thin read-compute-write shell around the kernel: parse the race setup,
//! then once per turn refresh the four pods from telemetry and emit one
//! command line per player pod. Commands go to stdout; logging stays on
//! stderr so the host only ever sees command lines.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};

use pod_pilot::Race;
use pod_pilot::consts::{OPPONENT_POD_COUNT, PLAYER_POD_COUNT};
use pod_pilot::protocol::{self, PodTelemetry};

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let race = read_setup(&mut lines)?;
    run(race, &mut lines)
}

/// Read the one-time setup preamble and build the race
fn read_setup(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Race> {
    let laps = protocol::parse_count(&required_line(lines)?).context("laps line")?;
    let checkpoint_count =
        protocol::parse_count(&required_line(lines)?).context("checkpoint count line")?;
    let mut positions = Vec::with_capacity(checkpoint_count as usize);
    for _ in 0..checkpoint_count {
        positions.push(protocol::parse_point(&required_line(lines)?)?);
    }
    log::info!("race: {} laps over {} checkpoints", laps, positions.len());
    Ok(Race::new(laps, &positions))
}

/// The per-turn loop, until the host closes its end
fn run(mut race: Race, lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<()> {
    loop {
        // The host ends the match by closing stdin; detect that only at a
        // turn boundary. A line missing mid-turn is a format error.
        let Some(first) = lines.next() else {
            log::info!("input closed, match over");
            return Ok(());
        };
        let telemetry: PodTelemetry = first.context("reading input")?.parse()?;
        race.update_player_pod(0, &telemetry);
        for slot in 1..PLAYER_POD_COUNT {
            let telemetry: PodTelemetry = required_line(lines)?.parse()?;
            race.update_player_pod(slot, &telemetry);
        }
        for slot in 0..OPPONENT_POD_COUNT {
            let telemetry: PodTelemetry = required_line(lines)?.parse()?;
            race.update_opponent_pod(slot, &telemetry);
        }

        let mut stdout = io::stdout().lock();
        for command in race.player_commands() {
            writeln!(stdout, "{command}")?;
        }
        stdout.flush()?;
    }
}

/// Next input line, where running out of input is an error
fn required_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    match lines.next() {
        Some(line) => line.context("reading input"),
        None => bail!("unexpected end of input mid-turn"),
    }
}
