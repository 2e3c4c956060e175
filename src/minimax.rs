//! Exhaustive minimax search
//!
//! X maximizes and O minimizes the terminal utility. The search walks the
//! whole remaining game tree from the given board with no pruning and no
//! memoization, and keeps no state between calls.

use tracing::debug;

use crate::{
    Error, Result,
    tictactoe::{
        Action, Board, Player, Score, apply_action, current_player, is_terminal, legal_actions,
        utility, winning_actions,
    },
};

/// Lower bound below every achievable score
const NEG_INFINITY: Score = Score::MIN;
/// Upper bound above every achievable score
const POS_INFINITY: Score = Score::MAX;

/// Order in which the root search visits actions.
///
/// Actions that complete a line for the player to move come first, then the
/// rest in row-major order. Scores do not depend on this order; it only
/// decides which of several equally valued actions is chosen.
pub fn search_order(board: &Board) -> Vec<Action> {
    let wins = winning_actions(board, current_player(board));
    let rest = legal_actions(board)
        .into_iter()
        .filter(|action| !wins.contains(action));
    wins.iter().copied().chain(rest).collect()
}

/// The optimal action for the player to move.
///
/// Ties go to the first optimal action in [`search_order`]: a later action
/// only replaces the current choice when it is strictly better.
///
/// # Errors
///
/// Returns [`Error::GameOver`] when the board is terminal.
pub fn best_action(board: &Board) -> Result<Action> {
    if is_terminal(board) {
        return Err(Error::GameOver);
    }

    let player = current_player(board);
    let mut best = None;

    match player {
        Player::X => {
            let mut v = NEG_INFINITY;
            for action in search_order(board) {
                let value = min_value(&apply_action(board, action)?)?;
                if value > v {
                    v = value;
                    best = Some((action, value));
                }
            }
        }
        Player::O => {
            let mut v = POS_INFINITY;
            for action in search_order(board) {
                let value = max_value(&apply_action(board, action)?)?;
                if value < v {
                    v = value;
                    best = Some((action, value));
                }
            }
        }
    }

    let (action, value) = best.ok_or(Error::GameOver)?;
    debug!(%player, %action, value, "selected best action");
    Ok(action)
}

/// Value of a board where X, the maximizer, is to move
///
/// # Errors
///
/// Only fails if a generated action is rejected, which the rules rule out.
pub fn max_value(board: &Board) -> Result<Score> {
    if is_terminal(board) {
        return utility(board);
    }

    let mut v = NEG_INFINITY;
    for action in legal_actions(board) {
        v = v.max(min_value(&apply_action(board, action)?)?);
    }
    Ok(v)
}

/// Value of a board where O, the minimizer, is to move
///
/// # Errors
///
/// Only fails if a generated action is rejected, which the rules rule out.
pub fn min_value(board: &Board) -> Result<Score> {
    if is_terminal(board) {
        return utility(board);
    }

    let mut v = POS_INFINITY;
    for action in legal_actions(board) {
        v = v.min(max_value(&apply_action(board, action)?)?);
    }
    Ok(v)
}

/// Minimax value of the board under optimal play by both sides.
///
/// For a terminal board this is its utility.
///
/// # Errors
///
/// Only fails if a generated action is rejected, which the rules rule out.
pub fn evaluate(board: &Board) -> Result<Score> {
    match current_player(board) {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// Minimax value of every legal action, in [`search_order`].
///
/// # Errors
///
/// Returns [`Error::GameOver`] when the board is terminal.
pub fn action_values(board: &Board) -> Result<Vec<(Action, Score)>> {
    if is_terminal(board) {
        return Err(Error::GameOver);
    }

    search_order(board)
        .into_iter()
        .map(|action| {
            let next = apply_action(board, action)?;
            Ok((action, evaluate(&next)?))
        })
        .collect()
}

/// Every action achieving the minimax value, in [`search_order`].
///
/// The first element is the action [`best_action`] returns.
///
/// # Errors
///
/// Returns [`Error::GameOver`] when the board is terminal.
pub fn optimal_actions(board: &Board) -> Result<Vec<Action>> {
    let values = action_values(board)?;
    let target = match current_player(board) {
        Player::X => values.iter().map(|&(_, v)| v).max(),
        Player::O => values.iter().map(|&(_, v)| v).min(),
    };

    Ok(values
        .into_iter()
        .filter(|&(_, v)| Some(v) == target)
        .map(|(action, _)| action)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::initial_state;

    #[test]
    fn test_takes_immediate_win() {
        // X to move, (2, 2) completes the main diagonal
        let board = Board::from_string("XO./.XO/...").unwrap();
        assert_eq!(current_player(&board), Player::X);
        assert_eq!(best_action(&board).unwrap(), Action::new(2, 2));
    }

    #[test]
    fn test_search_order_puts_wins_first() {
        // (0, 2) also wins by force through a fork, but (2, 2) wins now
        let board = Board::from_string("XO./.XO/...").unwrap();
        let order = search_order(&board);
        assert_eq!(order.len(), legal_actions(&board).len());
        assert_eq!(order[0], Action::new(2, 2));
        assert_eq!(order[1], Action::new(0, 2));

        let values = action_values(&board).unwrap();
        assert!(values.contains(&(Action::new(0, 2), 1)));
        assert!(values.contains(&(Action::new(2, 2), 1)));
    }

    #[test]
    fn test_immediate_win_beats_earlier_forced_win() {
        let board = Board::from_string("XO./.XO/...").unwrap();
        let row_major_first = legal_actions(&board)
            .into_iter()
            .find(|&action| evaluate(&apply_action(&board, action).unwrap()).unwrap() == 1)
            .unwrap();
        assert_eq!(row_major_first, Action::new(0, 2));

        let best = best_action(&board).unwrap();
        assert_eq!(best, Action::new(2, 2));
        assert_eq!(best, search_order(&board)[0]);
        assert_eq!(optimal_actions(&board).unwrap()[0], best);
    }

    #[test]
    fn test_o_blocks() {
        // O to move and must stop the top row
        let board = Board::from_string("XX./.O./...").unwrap();
        assert_eq!(current_player(&board), Player::O);
        assert_eq!(best_action(&board).unwrap(), Action::new(0, 2));
    }

    #[test]
    fn test_o_prefers_winning_to_blocking() {
        // X threatens the top row, but O can finish the middle row first
        let board = Board::from_string("XX./OO./X..").unwrap();
        assert_eq!(current_player(&board), Player::O);
        assert_eq!(best_action(&board).unwrap(), Action::new(1, 2));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = Board::from_string("XXX/.OO/...").unwrap();
        assert!(matches!(best_action(&board), Err(Error::GameOver)));
        assert!(matches!(action_values(&board), Err(Error::GameOver)));
        assert!(matches!(optimal_actions(&board), Err(Error::GameOver)));
    }

    #[test]
    fn test_values_on_terminal_boards() {
        let won = Board::from_string("XXX/.OO/...").unwrap();
        assert_eq!(max_value(&won).unwrap(), 1);
        assert_eq!(min_value(&won).unwrap(), 1);
        assert_eq!(evaluate(&won).unwrap(), 1);

        let drawn = Board::from_string("XOX/XOO/OXX").unwrap();
        assert_eq!(evaluate(&drawn).unwrap(), 0);
    }

    #[test]
    fn test_one_move_left() {
        // X to move with a single empty cell that does not win
        let board = Board::from_string("XOX/XOO/OX.").unwrap();
        assert_eq!(best_action(&board).unwrap(), Action::new(2, 2));
        assert_eq!(evaluate(&board).unwrap(), 0);
    }

    #[test]
    fn test_best_action_is_first_optimal_action() {
        let boards = [
            "X........",
            "....X....",
            "X...O....",
            "XO.......",
            "X.O.X....",
        ];
        for s in boards {
            let board = Board::from_string(s).unwrap();
            let optimal = optimal_actions(&board).unwrap();
            assert!(!optimal.is_empty());
            assert_eq!(best_action(&board).unwrap(), optimal[0], "board {s}");
        }
    }

    #[test]
    fn test_action_values_cover_legal_actions() {
        let board = Board::from_string("X...O....").unwrap();
        let values = action_values(&board).unwrap();
        assert_eq!(values.len(), legal_actions(&board).len());
        assert!(values.iter().all(|&(_, v)| (-1..=1).contains(&v)));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let board = initial_state();
        assert_eq!(evaluate(&board).unwrap(), 0);
        // Every opening move draws with best play
        assert_eq!(optimal_actions(&board).unwrap().len(), 9);
        assert_eq!(best_action(&board).unwrap(), Action::new(0, 0));
    }
}
