//! Best command - print the optimal move for a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{describe_action, format_board, print_kv},
    minimax,
    tictactoe::{current_player, outcome},
};

#[derive(Parser, Debug)]
#[command(about = "Print the minimax-optimal move for a position")]
pub struct BestArgs {
    /// Board as nine cells, row-major (X, O and . for empty), e.g. "XO./.X./..."
    #[arg(long, short = 'b')]
    pub board: String,
}

pub fn execute(args: BestArgs) -> Result<()> {
    let board = super::parse_board(&args.board)?;
    print!("{}", format_board(&board));

    if let Some(outcome) = outcome(&board) {
        print_kv("Game over", &outcome.to_string());
        return Ok(());
    }

    let action = minimax::best_action(&board)?;
    print_kv("To move", &current_player(&board).to_string());
    print_kv("Best move", &describe_action(action));
    Ok(())
}
