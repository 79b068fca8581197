//! Random Move Strategy
//!
//! Selects uniformly at random from all legal moves. Useful for:
//! - Estimating baseline win probabilities over large batches
//! - Baseline comparisons (any real strategy should beat this)
//! - Stress testing move generation

use othello_core::{legal_moves_into, Game, Move, Strategy, StrategyError};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A strategy that plays random legal moves.
///
/// No evaluation at all, just a uniform pick over the legal-move list.
/// Callers must not ask for a move when the side to move has none.
#[derive(Debug, Clone, Default)]
pub struct RandomStrategy {
    moves: Vec<Move>,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(32),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, game: &Game) -> Result<Move, StrategyError> {
        let side = game.to_move().expect("game is already over");
        legal_moves_into(game.board(), side, &mut self.moves);

        let mv = self
            .moves
            .choose(&mut thread_rng())
            .copied()
            .expect("no legal moves available");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.moves.clear();
    }
}
