//! Rules engine: turn order, legal actions, transitions and scoring
//!
//! Every function here is a pure function of its board argument. Whose turn
//! it is gets recomputed from the mark counts on each call rather than
//! stored, so [`current_player`] and [`apply_action`] cannot drift apart.

use std::collections::BTreeSet;

use super::{Action, Board, Cell, GameOutcome, Player, lines::LineAnalyzer};
use crate::{Error, Result};

/// Utility of a terminal board from X's point of view
pub type Score = i32;

/// Utility of a board X has won
pub const X_WIN: Score = 1;
/// Utility of a board O has won
pub const O_WIN: Score = -1;
/// Utility of a drawn board
pub const DRAW: Score = 0;

/// The canonical empty starting board
pub fn initial_state() -> Board {
    Board::new()
}

/// Player who has the next turn.
///
/// X moves first, so equal counts mean X is to move; otherwise the player
/// with fewer marks is.
pub fn current_player(board: &Board) -> Player {
    let count = board.count_pieces();
    if count.x > count.o {
        Player::O
    } else {
        Player::X
    }
}

/// Every empty cell on the board.
///
/// The set iterates in row-major order; that order is what makes search
/// tie-breaks reproducible.
pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
    Action::all()
        .filter(|&action| board.get(action) == Some(Cell::Empty))
        .collect()
}

/// Board that results from the current player marking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`Error::InvalidMove`] if the cell is out of range or occupied.
#[must_use = "apply_action returns a new board; the original is unchanged"]
pub fn apply_action(board: &Board, action: Action) -> Result<Board> {
    if board.get(action) != Some(Cell::Empty) {
        return Err(Error::InvalidMove {
            row: action.row,
            col: action.col,
        });
    }

    Ok(board.with_cell(action, current_player(board).to_cell()))
}

/// The winner of the game, if there is one
pub fn winner(board: &Board) -> Option<Player> {
    LineAnalyzer::winner(board)
}

/// Check if the game is over (win or full board)
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.count(Cell::Empty) == 0
}

/// Outcome of a finished game, `None` while play continues
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    match winner(board) {
        Some(player) => Some(GameOutcome::Win(player)),
        None if is_terminal(board) => Some(GameOutcome::Draw),
        None => None,
    }
}

/// 1 if X has won, -1 if O has won, 0 for a draw.
///
/// # Errors
///
/// Returns [`Error::NotTerminal`] when the game is still in progress.
pub fn utility(board: &Board) -> Result<Score> {
    match outcome(board) {
        Some(GameOutcome::Win(Player::X)) => Ok(X_WIN),
        Some(GameOutcome::Win(Player::O)) => Ok(O_WIN),
        Some(GameOutcome::Draw) => Ok(DRAW),
        None => Err(Error::NotTerminal),
    }
}

/// Empty cells that would complete a line for `player` right away
pub fn winning_actions(board: &Board, player: Player) -> BTreeSet<Action> {
    LineAnalyzer::winning_actions(board, player)
}
