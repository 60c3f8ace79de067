//! Race state: the checkpoint loop and the four pods
//!
//! The race is built once from the setup preamble and lives for the whole
//! match. Pods are updated in place from telemetry; there is no blending of
//! simulated and observed state.

use crate::consts::{OPPONENT_POD_COUNT, PLAYER_POD_COUNT};
use crate::geom::Point;
use crate::protocol::PodTelemetry;

use super::{Checkpoint, Command, Pod, turn};

/// Full state for one match
#[derive(Debug, Clone)]
pub struct Race {
    laps: u32,
    checkpoints: Vec<Checkpoint>,
    player_pods: Vec<Pod>,
    opponent_pods: Vec<Pod>,
}

impl Race {
    /// Build a race from its lap count and checkpoint positions.
    ///
    /// Panics on an empty checkpoint list; a race without checkpoints is a
    /// programming error upstream.
    pub fn new(laps: u32, checkpoint_positions: &[Point]) -> Self {
        assert!(
            !checkpoint_positions.is_empty(),
            "a race needs at least one checkpoint"
        );
        let checkpoints = checkpoint_positions
            .iter()
            .enumerate()
            .map(|(index, &position)| Checkpoint::new(index, position))
            .collect();
        Self {
            laps,
            checkpoints,
            player_pods: vec![Pod::new(); PLAYER_POD_COUNT],
            opponent_pods: vec![Pod::new(); OPPONENT_POD_COUNT],
        }
    }

    #[inline]
    pub fn laps(&self) -> u32 {
        self.laps
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    pub fn player_pods(&self) -> &[Pod] {
        &self.player_pods
    }

    pub fn opponent_pods(&self) -> &[Pod] {
        &self.opponent_pods
    }

    /// Checkpoint at `index` (must be a valid loop index)
    pub fn checkpoint(&self, index: usize) -> &Checkpoint {
        &self.checkpoints[index]
    }

    /// Loop successor: the checkpoint after the last one is the first
    pub fn checkpoint_after(&self, index: usize) -> &Checkpoint {
        &self.checkpoints[(index + 1) % self.checkpoints.len()]
    }

    /// Refresh a player pod from telemetry
    pub fn update_player_pod(&mut self, slot: usize, telemetry: &PodTelemetry) {
        let checkpoint_count = self.checkpoints.len();
        let pod = &mut self.player_pods[slot];
        let previous_lap = pod.lap;
        pod.apply_telemetry(telemetry, checkpoint_count);
        if pod.lap != previous_lap {
            log::info!("player pod {} starts lap {}/{}", slot, pod.lap, self.laps);
        }
    }

    /// Refresh an opponent pod from telemetry (observed, never driven)
    pub fn update_opponent_pod(&mut self, slot: usize, telemetry: &PodTelemetry) {
        let checkpoint_count = self.checkpoints.len();
        self.opponent_pods[slot].apply_telemetry(telemetry, checkpoint_count);
    }

    /// This turn's command for one pod
    pub fn compute_next_command(&self, pod: &Pod) -> Command {
        let next = self.checkpoint(pod.next_checkpoint);
        let following = self.checkpoint_after(pod.next_checkpoint);
        turn::decide(pod, next, following)
    }

    /// Commands for both player pods, in slot order
    pub fn player_commands(&self) -> Vec<Command> {
        self.player_pods
            .iter()
            .map(|pod| self.compute_next_command(pod))
            .collect()
    }
}
