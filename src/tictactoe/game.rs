//! High-level game management

use serde::{Deserialize, Serialize};

use super::{
    Action, Board, Player,
    rules::{apply_action, current_player, outcome},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// A game in progress or finished, with its move history held in memory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Create a game continuing from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: outcome(&initial),
        }
    }

    /// Play an action for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has finished and
    /// [`crate::Error::InvalidMove`] for an illegal action. The game is left
    /// unchanged on error.
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_board()?;
        let next = apply_action(&current, action)?;

        self.moves.push(Move {
            action,
            player: current_player(&current),
        });
        self.outcome = outcome(&next);

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board it
    /// is replayed on, which means the history was edited by hand.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut board = self.initial;
        for m in self.moves.iter().take(end_index) {
            board = apply_action(&board, m.action)?;
        }
        Ok(board)
    }

    /// Get current board
    ///
    /// # Errors
    ///
    /// Returns error if the recorded history does not replay.
    pub fn current_board(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of boards, starting with the initial one
    ///
    /// # Errors
    ///
    /// Returns error if the recorded history does not replay.
    pub fn board_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        (0..=self.moves.len())
            .map(|i| self.replay_moves_until(i))
            .collect()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
