//! Analyze command - minimax value of every legal move

use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{describe_action, describe_score, format_board, print_kv, print_section},
    minimax,
    tictactoe::{Action, Board, Player, Score, current_player, is_terminal},
};

#[derive(Parser, Debug)]
#[command(about = "Show the minimax value of every legal move")]
pub struct AnalyzeArgs {
    /// Board to analyze; the empty board when omitted
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Export the analysis as JSON
    #[arg(long)]
    pub export: Option<std::path::PathBuf>,
}

/// Minimax analysis of one position
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub board: String,
    pub to_move: Player,
    pub value: Score,
    pub actions: Vec<ActionValue>,
    pub optimal: Vec<Action>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActionValue {
    pub action: Action,
    pub value: Score,
}

/// Analyze a non-terminal board
pub fn analyze_board(board: &Board) -> crate::Result<Analysis> {
    let actions: Vec<ActionValue> = minimax::action_values(board)?
        .into_iter()
        .map(|(action, value)| ActionValue { action, value })
        .collect();

    Ok(Analysis {
        board: board.encode(),
        to_move: current_player(board),
        value: minimax::evaluate(board)?,
        actions,
        optimal: minimax::optimal_actions(board)?,
    })
}

/// Write an analysis to a JSON file
pub fn export_analysis(analysis: &Analysis, path: &Path) -> crate::Result<()> {
    let file = File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), analysis)?;
    Ok(())
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = match &args.board {
        Some(s) => super::parse_board(s)?,
        None => Board::new(),
    };

    print_section("Minimax Analysis");
    print!("{}", format_board(&board));

    if is_terminal(&board) {
        println!("  (board is terminal)");
        return Ok(());
    }

    let analysis = analyze_board(&board)?;
    print_kv("To move", &analysis.to_move.to_string());
    print_kv("Value", describe_score(analysis.value));

    println!("\nMoves:");
    for entry in &analysis.actions {
        let marker = if analysis.optimal.contains(&entry.action) {
            "*"
        } else {
            " "
        };
        println!(
            "  {marker} {:24} {}",
            describe_action(entry.action),
            describe_score(entry.value)
        );
    }

    if let Some(path) = args.export {
        export_analysis(&analysis, &path)
            .with_context(|| format!("failed to export analysis to {}", path.display()))?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}
