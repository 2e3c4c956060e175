//! Tic-Tac-Toe game implementation

pub mod action;
pub mod board;
pub mod game;
pub mod lines;
pub mod rules;
pub mod validation;

pub use action::Action;
pub use board::{Board, Cell, Player};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{
    Score, apply_action, current_player, initial_state, is_terminal, legal_actions, outcome,
    utility, winner, winning_actions,
};
