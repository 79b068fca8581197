//! Othello Arena
//!
//! This crate provides infrastructure for:
//! - Playing a single interactively-reported game at the console
//! - Running silent batches of independent games to estimate win
//!   probabilities between strategies
//!
//! # Usage
//!
//! ```bash
//! # One console game, human against the greedy strategy
//! cargo run -p arena -- play human greedy
//!
//! # Estimate first-mover advantage over 10000 random-vs-random games
//! cargo run -p arena -- simulate random random --games 10000
//! ```

mod game_runner;
mod stats;

pub use game_runner::*;
pub use stats::*;
