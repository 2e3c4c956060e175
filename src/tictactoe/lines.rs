//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Action, Board, Cell, Player};

const fn a(row: usize, col: usize) -> Action {
    Action::new(row, col)
}

/// The eight winning lines: rows, then columns, then diagonals
pub const WINNING_LINES: [[Action; 3]; 8] = [
    [a(0, 0), a(0, 1), a(0, 2)],
    [a(1, 0), a(1, 1), a(1, 2)],
    [a(2, 0), a(2, 1), a(2, 2)], // rows
    [a(0, 0), a(1, 0), a(2, 0)],
    [a(0, 1), a(1, 1), a(2, 1)],
    [a(0, 2), a(1, 2), a(2, 2)], // columns
    [a(0, 0), a(1, 1), a(2, 2)],
    [a(0, 2), a(1, 1), a(2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Owner of the first complete line, scanning rows, columns, diagonals
    pub fn winner(board: &Board) -> Option<Player> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::line_owner(board, line))
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(board: &Board, player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owner(board, line) == Some(player))
    }

    /// All complete lines belonging to the player
    pub fn winning_lines(board: &Board, player: Player) -> Vec<[Action; 3]> {
        WINNING_LINES
            .iter()
            .filter(|line| Self::line_owner(board, line) == Some(player))
            .copied()
            .collect()
    }

    /// Find all empty cells that would immediately complete a line for the player
    pub fn winning_actions(board: &Board, player: Player) -> BTreeSet<Action> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_action_in_line(board, player, line))
            .collect()
    }

    fn line_owner(board: &Board, line: &[Action; 3]) -> Option<Player> {
        let [first, second, third] = line.map(|action| board.get(action));
        if first == second && second == third {
            first.and_then(Cell::to_player)
        } else {
            None
        }
    }

    /// The empty cell in a line holding two of the player's marks, if any
    fn winning_action_in_line(board: &Board, player: Player, line: &[Action; 3]) -> Option<Action> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty = None;

        for &action in line {
            match board.get(action) {
                Some(Cell::Empty) => {
                    if empty.is_some() {
                        return None;
                    }
                    empty = Some(action);
                }
                Some(c) if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut rows = [[Cell::Empty; 3]; 3];
                for action in line {
                    rows[action.row][action.col] = player.to_cell();
                }
                let board = Board::from_rows(rows);
                assert_eq!(LineAnalyzer::winner(&board), Some(player));
                assert!(LineAnalyzer::has_won(&board, player));
                assert!(!LineAnalyzer::has_won(&board, player.opponent()));
            }
        }
    }

    #[test]
    fn test_no_winner_on_mixed_lines() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(LineAnalyzer::winner(&board), None);
        assert!(LineAnalyzer::winning_lines(&board, Player::X).is_empty());
    }

    #[test]
    fn test_winning_actions() {
        // X.X
        // ...
        // ...
        let board = Board::from_string("X.X......").unwrap();
        let actions = LineAnalyzer::winning_actions(&board, Player::X);
        assert_eq!(actions.len(), 1);
        assert!(actions.contains(&Action::new(0, 1)));
        assert!(LineAnalyzer::winning_actions(&board, Player::O).is_empty());
    }

    #[test]
    fn test_winning_actions_multiple() {
        // XX.
        // X..
        // ...
        let board = Board::from_string("XX.X.....").unwrap();
        let actions = LineAnalyzer::winning_actions(&board, Player::X);
        assert_eq!(actions.len(), 2);
        assert!(actions.contains(&Action::new(0, 2))); // top row
        assert!(actions.contains(&Action::new(2, 0))); // left column
        assert!(!actions.contains(&Action::new(2, 2)));
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let board = Board::from_string("XXO......").unwrap();
        assert!(LineAnalyzer::winning_actions(&board, Player::X).is_empty());
    }
}
