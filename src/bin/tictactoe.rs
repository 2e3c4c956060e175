//! Tic-Tac-Toe CLI - optimal play by exhaustive minimax search

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-Tac-Toe with a minimax opponent", long_about = None)]
struct Cli {
    /// Log search and match details (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the optimal move for a position
    Best(tictactoe_minimax::cli::commands::best::BestArgs),

    /// Show the minimax value of every legal move
    Analyze(tictactoe_minimax::cli::commands::analyze::AnalyzeArgs),

    /// Play a game between humans, minimax and random agents
    Play(tictactoe_minimax::cli::commands::play::PlayArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Best(args) => tictactoe_minimax::cli::commands::best::execute(args),
        Commands::Analyze(args) => tictactoe_minimax::cli::commands::analyze::execute(args),
        Commands::Play(args) => tictactoe_minimax::cli::commands::play::execute(args),
    }
}
