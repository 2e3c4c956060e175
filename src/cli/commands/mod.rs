//! Subcommands of the `tictactoe` binary

pub mod analyze;
pub mod best;
pub mod play;

use anyhow::{Context, Result};

use crate::tictactoe::Board;

/// Parse a board given on the command line and reject impossible positions
pub fn parse_board(s: &str) -> Result<Board> {
    let board = Board::from_string(s).with_context(|| format!("could not parse board '{s}'"))?;
    board
        .ensure_reachable()
        .with_context(|| format!("board '{s}' cannot occur in a game"))?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_board_checks_reachability() {
        assert!(parse_board("X...O....").is_ok());
        assert!(parse_board("XX.......").is_err());
        assert!(parse_board("XO").is_err());
    }
}
