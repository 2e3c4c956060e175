//! Tic-Tac-Toe with an exhaustive minimax player
//!
//! This crate provides:
//! - A 3x3 board model and the rules engine (turn order, legal actions,
//!   transitions, win and terminal detection, utility)
//! - Full-depth minimax search choosing the optimal action for either side
//! - An agent abstraction and match runner pitting players against each other
//! - A command-line front end for analysis and interactive play
//!
//! ```
//! use tictactoe_minimax::{minimax, tictactoe};
//!
//! let board = tictactoe::initial_state();
//! let action = minimax::best_action(&board).unwrap();
//! let next = tictactoe::apply_action(&board, action).unwrap();
//! assert_eq!(tictactoe::current_player(&next), tictactoe::Player::O);
//! ```

pub mod cli;
pub mod error;
pub mod minimax;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use error::{Error, Result};
