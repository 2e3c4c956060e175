//! Agent port - anything that chooses an action for a board
//!
//! The match runner only talks to this trait, so the minimax player, the
//! random baseline and a human at the terminal are interchangeable.

use crate::{
    Result,
    tictactoe::{Action, Board},
};

/// Unified interface for everything that can take a turn
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::{
///     pipeline::MinimaxAgent,
///     ports::Agent,
///     tictactoe::{Action, Board},
/// };
///
/// let mut agent = MinimaxAgent::new("Minimax");
/// let board = Board::from_string("XO./.XO/...").unwrap();
/// assert_eq!(agent.select_action(&board).unwrap(), Action::new(2, 2));
/// ```
pub trait Agent {
    /// Select an action for the player whose turn it is on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is terminal or the agent cannot
    /// produce an action (for example, its input closed).
    fn select_action(&mut self, board: &Board) -> Result<Action>;

    /// Get the agent's name, used in logs and match summaries.
    fn name(&self) -> &str;
}
