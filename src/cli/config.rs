//! Shared configuration types for CLI commands

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    pipeline::{MinimaxAgent, RandomAgent},
    ports::Agent,
};

/// Who controls one side of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// A person typing moves at the terminal
    Human,
    /// The exhaustive minimax player
    Minimax,
    /// Uniformly random legal moves
    Random,
}

impl AgentKind {
    /// Build a non-interactive agent; `None` for [`AgentKind::Human`],
    /// which needs a terminal supplied by the caller.
    pub fn build(self, name: &str, seed: Option<u64>) -> Option<Box<dyn Agent>> {
        match self {
            AgentKind::Human => None,
            AgentKind::Minimax => Some(Box::new(MinimaxAgent::new(name))),
            AgentKind::Random => Some(Box::new(match seed {
                Some(seed) => RandomAgent::with_seed(name, seed),
                None => RandomAgent::new(name),
            })),
        }
    }
}

/// Configuration for a match.
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::cli::config::{AgentKind, PlayConfig};
///
/// let config = PlayConfig::default()
///     .with_x(AgentKind::Minimax)
///     .with_o(AgentKind::Random)
///     .with_seed(42);
/// assert_eq!(config.o, AgentKind::Random);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Controller of X
    pub x: AgentKind,
    /// Controller of O
    pub o: AgentKind,
    /// Starting position; the empty board when `None`
    pub start: Option<String>,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl PlayConfig {
    pub fn with_x(mut self, kind: AgentKind) -> Self {
        self.x = kind;
        self
    }

    pub fn with_o(mut self, kind: AgentKind) -> Self {
        self.o = kind;
        self
    }

    pub fn with_start(mut self, board: impl Into<String>) -> Self {
        self.start = Some(board.into());
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            x: AgentKind::Human,
            o: AgentKind::Minimax,
            start: None,
            seed: None,
        }
    }
}
