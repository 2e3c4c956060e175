//! Ports (trait boundaries) between the game core and its players.

pub mod agent;

pub use agent::Agent;
