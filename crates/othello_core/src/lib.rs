pub mod board;
pub mod game;
pub mod movegen;
pub mod types;

// Re-export core game logic (not strategy-specific)
pub use board::*;
pub use game::*;
pub use movegen::*;
pub use types::*;

// =============================================================================
// Strategy trait — implemented by all move-selection strategies
// =============================================================================

/// Terminal failure while selecting a move.
///
/// Only the human strategy ever produces this: its input stream closed
/// before a usable move was read. Malformed input is recovered locally by
/// re-prompting and never surfaces here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyError {
    InputClosed,
}

impl std::fmt::Display for StrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyError::InputClosed => write!(f, "input stream closed"),
        }
    }
}

impl std::error::Error for StrategyError {}

/// Trait that all move-selection strategies must implement.
///
/// This allows wiring any two of the human, random, and greedy strategies
/// together in a runner without the runner knowing which is which.
pub trait Strategy {
    /// Choose a move for the side to move in `game`.
    ///
    /// Precondition: the game is not over and the side to move has at
    /// least one legal move (callers check `Game::is_over` /
    /// `Board::mobility` first). Violating this is a contract error.
    fn select_move(&mut self, game: &Game) -> Result<Move, StrategyError>;

    /// Returns the strategy's name for reporting
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
