//! Win/draw tallies and probability reporting

use serde::{Deserialize, Serialize};

/// Result of a single game, from the first strategy's perspective.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same result seen from the other side.
    pub fn flip(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games), from the first strategy's perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchTally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first strategy's perspective (1 for win, 0.5 for
    /// draw, 0 for loss).
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Fraction of games the first strategy won outright.
    pub fn win_probability(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.0;
        }
        self.wins as f64 / total
    }

    /// Fraction of games the second strategy won outright.
    pub fn loss_probability(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.0;
        }
        self.losses as f64 / total
    }

    /// The two-line batch report: one win probability per strategy.
    pub fn probability_report(&self, name1: &str, name2: &str) -> String {
        format!(
            "Probability {} wins={}\nProbability {} wins={}",
            name1,
            self.win_probability(),
            name2,
            self.loss_probability()
        )
    }

    /// The tally as pretty-printed JSON, for machine consumers on stdout.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))
    }
}
