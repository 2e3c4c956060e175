//! Play command - run a match between humans and agents

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{AgentKind, PlayConfig},
        human::HumanAgent,
        output::{format_board, print_kv, print_section},
    },
    pipeline::play_match,
    ports::Agent,
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game of tic-tac-toe")]
pub struct PlayArgs {
    /// Who plays X
    #[arg(long, short = 'x', value_enum, default_value = "human")]
    pub x: AgentKind,

    /// Who plays O
    #[arg(long, short = 'o', value_enum, default_value = "minimax")]
    pub o: AgentKind,

    /// Starting board; the empty board when omitted
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<PlayArgs> for PlayConfig {
    fn from(args: PlayArgs) -> Self {
        let mut config = PlayConfig::default().with_x(args.x).with_o(args.o);
        if let Some(board) = args.board {
            config = config.with_start(board);
        }
        if let Some(seed) = args.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn make_agent(kind: AgentKind, player: Player, seed: Option<u64>) -> Box<dyn Agent> {
    let name = format!("{kind:?} ({player})");
    match kind.build(&name, seed) {
        Some(agent) => agent,
        None => Box::new(HumanAgent::stdio(name)),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = PlayConfig::from(args);
    let start = match &config.start {
        Some(s) => super::parse_board(s)?,
        None => Board::new(),
    };

    // Give the two sides different streams when both are random
    let mut x = make_agent(config.x, Player::X, config.seed);
    let mut o = make_agent(config.o, Player::O, config.seed.map(|s| s.wrapping_add(1)));

    let result = play_match(x.as_mut(), o.as_mut(), start)?;

    print_section("Game Over");
    print!("{}", format_board(&result.game.current_board()?));
    let moves: Vec<String> = result
        .game
        .moves
        .iter()
        .map(|m| format!("{}{}", m.player, m.action))
        .collect();
    print_kv("Moves", &moves.join(" "));
    match result.winner_name() {
        Some(name) => print_kv("Winner", name),
        None => print_kv("Result", "draw"),
    }

    Ok(())
}
