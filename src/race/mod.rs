//! Race domain: checkpoints, pods, match state and the thrust policy

pub mod checkpoint;
pub mod command;
pub mod pod;
pub mod state;
pub mod turn;

pub use checkpoint::Checkpoint;
pub use command::Command;
pub use pod::{Pod, advance_checkpoint};
pub use state::Race;
pub use turn::{TurnBand, decide};
