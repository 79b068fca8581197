//! Human Strategy
//!
//! Asks a person for a row and a column, one integer per prompt, reading
//! from an input collaborator owned by the strategy instance. Out-of-range
//! or non-numeric input re-prompts; a closed stream is a terminal error
//! and aborts the request without retry.

use std::io::{self, BufRead, BufReader, Stdin, Write};

use othello_core::{Game, Move, Strategy, StrategyError};


/// A strategy that plays whatever the person at the console types.
///
/// The reader is injected rather than taken from a process-wide stream,
/// so tests can drive it from a buffer and two human players can, in
/// principle, use distinct inputs.
#[derive(Debug)]
pub struct HumanStrategy<R> {
    input: R,
}

impl HumanStrategy<BufReader<Stdin>> {
    /// A strategy wired to the real console.
    pub fn from_stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> HumanStrategy<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Prompt until an integer in [0, dim) arrives. Err when the stream
    /// closes or fails before that happens.
    fn read_coord(&mut self, prompt: &str, dim: usize) -> Result<usize, StrategyError> {
        loop {
            print!("{}", prompt);
            io::stdout().flush().ok();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Err(StrategyError::InputClosed),
                Ok(_) => {}
            }
            match line.trim().parse::<usize>() {
                Ok(v) if v < dim => return Ok(v),
                _ => println!("Invalid number, please enter 0-{}", dim - 1),
            }
        }
    }
}

impl<R: BufRead> Strategy for HumanStrategy<R> {
    fn select_move(&mut self, game: &Game) -> Result<Move, StrategyError> {
        let dim = game.dim();
        let row = self.read_coord("row: ", dim)?;
        let col = self.read_coord("col: ", dim)?;
        Ok(Move::new(row, col))
    }

    fn name(&self) -> &str {
        "Human"
    }
}
