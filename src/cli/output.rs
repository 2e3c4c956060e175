//! Output formatting for CLI

use crate::tictactoe::{Action, Board, Score};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board with row and column labels, e.g.
///
/// ```text
///     0 1 2
///   0 X . O
///   1 . X .
///   2 . . .
/// ```
pub fn format_board(board: &Board) -> String {
    let mut out = String::from("    0 1 2\n");
    for (r, row) in board.rows().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
        out.push_str(&format!("  {r} {}\n", cells.join(" ")));
    }
    out
}

/// Describe an action as `(row, col)` plus its cell index when on the board
pub fn describe_action(action: Action) -> String {
    match action.index() {
        Some(index) => format!("{action} [cell {index}]"),
        None => format!("{action} [off board]"),
    }
}

/// Human-readable name for a score from X's point of view
pub fn describe_score(score: Score) -> &'static str {
    match score {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}
