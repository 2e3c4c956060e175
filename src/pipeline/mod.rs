//! Match pipeline
//!
//! Agent adapters implementing [`Agent`] and the runner that plays them
//! against each other.

pub mod agents;
pub mod matches;

pub use agents::{MinimaxAgent, RandomAgent};
pub use matches::{MatchResult, play_match};

pub use crate::ports::Agent;
