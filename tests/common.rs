//! Common test utilities: board enumeration.

use std::collections::{HashSet, VecDeque};

use tictactoe_minimax::tictactoe::{
    Board, Cell, apply_action, is_terminal, legal_actions,
};

/// All 3^9 = 19,683 cell assignments, reachable or not.
#[allow(dead_code)]
pub fn all_configurations() -> Vec<Board> {
    let mut boards = Vec::with_capacity(19_683);
    for code in 0..19_683usize {
        let mut rest = code;
        let mut rows = [[Cell::Empty; 3]; 3];
        for cell in rows.iter_mut().flatten() {
            *cell = match rest % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                _ => Cell::O,
            };
            rest /= 3;
        }
        boards.push(Board::from_rows(rows));
    }
    boards
}

/// Every board reachable from the empty board through legal play.
#[allow(dead_code)]
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    let root = Board::new();
    seen.insert(root);
    queue.push_back(root);

    let mut boards = Vec::new();
    while let Some(board) = queue.pop_front() {
        boards.push(board);
        if is_terminal(&board) {
            continue;
        }
        for action in legal_actions(&board) {
            let next = apply_action(&board, action).expect("legal action must apply");
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    boards
}
