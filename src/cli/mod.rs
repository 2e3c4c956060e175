//! Command-line front end
//!
//! Everything that touches the terminal lives here; the game core in
//! [`crate::tictactoe`] and [`crate::minimax`] does no I/O.

pub mod commands;
pub mod config;
pub mod human;
pub mod output;
