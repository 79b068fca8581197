//! Match runner for playing games between strategies

use serde::Deserialize;

use othello_core::{Game, Outcome, Player, Strategy, StrategyError};

use crate::stats::{GameResult, MatchTally};

/// Configuration for a match.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Whether to swap which strategy plays Dark each game
    pub alternate_colors: bool,
    /// Report boards, counts, and moves during play
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10_000,
            alternate_colors: false,
            verbose: false,
        }
    }
}

impl MatchConfig {
    /// Load a config from a TOML file.
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

/// Runs matches between two strategies.
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two strategies. Each game gets fresh state;
    /// the tally is from `strategy1`'s perspective. Stops early only if
    /// a strategy's input fails terminally.
    pub fn run_match(
        &self,
        strategy1: &mut dyn Strategy,
        strategy2: &mut dyn Strategy,
    ) -> Result<MatchTally, StrategyError> {
        let mut tally = MatchTally::new();

        for game_num in 0..self.config.num_games {
            let first_is_dark = !self.config.alternate_colors || game_num % 2 == 0;

            let result = if first_is_dark {
                self.play_game(strategy1, strategy2)?
            } else {
                self.play_game(strategy2, strategy1)?.flip()
            };
            tally.record(result);
        }

        Ok(tally)
    }

    /// Play a single game to completion, `dark` moving first. The result
    /// is from Dark's perspective.
    pub fn play_game<'a>(
        &self,
        dark: &'a mut dyn Strategy,
        light: &'a mut dyn Strategy,
    ) -> Result<GameResult, StrategyError> {
        let mut game = Game::new();
        dark.new_game();
        light.new_game();

        while let Some(side) = game.to_move() {
            if self.config.verbose {
                report(&game);
            }

            let strategy = match side {
                Player::Dark => &mut *dark,
                Player::Light => &mut *light,
            };
            let mv = strategy.select_move(&game)?;

            // An illegal choice leaves the same side to move, so a human
            // simply gets asked again; random and greedy never pick one.
            if game.apply_move(mv.row, mv.col) {
                if self.config.verbose {
                    println!("{} makes move {}\n", side.glyph(), mv);
                }
            } else if self.config.verbose {
                println!("{} cannot move to {}\n", side.glyph(), mv);
            }
        }

        if self.config.verbose {
            report_final(&game);
        }

        Ok(match game.outcome().expect("game just finished") {
            Outcome::Winner(Player::Dark) => GameResult::Win,
            Outcome::Winner(Player::Light) => GameResult::Loss,
            Outcome::Draw => GameResult::Draw,
        })
    }
}

fn report(game: &Game) {
    println!(
        "{}{}:{} {}:{}  {} moves next",
        game.board(),
        Player::Dark.glyph(),
        game.count(Player::Dark),
        Player::Light.glyph(),
        game.count(Player::Light),
        game.to_move().map_or(' ', Player::glyph)
    );
}

fn report_final(game: &Game) {
    let verdict = match game.outcome() {
        Some(Outcome::Winner(p)) => format!("{} won", p.glyph()),
        _ => "draw".to_string(),
    };
    println!(
        "{}{}:{} {}:{}  {}\n",
        game.board(),
        Player::Dark.glyph(),
        game.count(Player::Dark),
        Player::Light.glyph(),
        game.count(Player::Light),
        verdict
    );
}

/// Quick utility to run a silent batch with default settings.
pub fn quick_match(
    strategy1: &mut dyn Strategy,
    strategy2: &mut dyn Strategy,
    num_games: u32,
) -> Result<MatchTally, StrategyError> {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(strategy1, strategy2)
}
