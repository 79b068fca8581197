//! Greedy Strategy
//!
//! One-ply search with no lookahead: take the move that maximizes this
//! player's own token count right now, ties going to the smallest row and
//! then the smallest column. Deterministic given the board state.

use othello_core::{Game, Move, Strategy, StrategyError};


/// A strategy that plays the immediately most-capturing move.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    pub fn new() -> Self {
        GreedyStrategy
    }
}

impl Strategy for GreedyStrategy {
    fn select_move(&mut self, game: &Game) -> Result<Move, StrategyError> {
        let side = game.to_move().expect("game is already over");
        let (mv, _gain) = game
            .board()
            .greedy_move(side)
            .expect("no legal moves available");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
