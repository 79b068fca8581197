//! Arena CLI
//!
//! Play an interactive game or run batch simulations between strategies.

use std::env;

use arena::{MatchConfig, MatchRunner};
use greedy_strategy::GreedyStrategy;
use human_strategy::HumanStrategy;
use othello_core::{Strategy, StrategyError};
use random_strategy::RandomStrategy;

fn print_usage() {
    println!("Othello Arena");
    println!();
    println!("Usage:");
    println!("  arena play <strategy1> <strategy2>");
    println!("  arena simulate <strategy1> <strategy2> [--games N] [--config FILE] [--json]");
    println!();
    println!("Strategies:");
    println!("  human   - prompts for each move at the console");
    println!("  random  - uniform random choice among legal moves");
    println!("  greedy  - one-ply maximizer of immediate token gain");
    println!();
    println!("Examples:");
    println!("  arena play human greedy");
    println!("  arena simulate random greedy --games 10000");
    println!("  arena simulate random random --config sim.toml --json");
}

fn create_strategy(spec: &str) -> Result<Box<dyn Strategy>, String> {
    match spec.to_lowercase().as_str() {
        "human" => Ok(Box::new(HumanStrategy::from_stdin())),
        "random" => Ok(Box::new(RandomStrategy::new())),
        "greedy" => Ok(Box::new(GreedyStrategy::new())),
        _ => Err(format!("Unknown strategy: {}", spec)),
    }
}

fn run_play(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: play requires two strategy specifications");
        print_usage();
        return;
    }

    let (mut strategy1, mut strategy2) = match (create_strategy(&args[0]), create_strategy(&args[1]))
    {
        (Ok(s1), Ok(s2)) => (s1, s2),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {}", e);
            print_usage();
            return;
        }
    };

    let config = MatchConfig {
        num_games: 1,
        verbose: true,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);

    match runner.play_game(strategy1.as_mut(), strategy2.as_mut()) {
        Ok(_) => {}
        Err(StrategyError::InputClosed) => {
            eprintln!("Input stream closed, aborting the game");
        }
    }
}

fn run_simulate(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: simulate requires two strategy specifications");
        print_usage();
        return;
    }

    let strategy1_spec = &args[0];
    let strategy2_spec = &args[1];

    // Parse optional arguments
    let mut config = MatchConfig::default();
    let mut json = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match MatchConfig::load(&args[i + 1]) {
                        Ok(loaded) => config = loaded,
                        Err(e) => {
                            eprintln!("Error: {}", e);
                            return;
                        }
                    }
                    i += 1;
                }
            }
            "--json" => json = true,
            _ => {}
        }
        i += 1;
    }

    let (mut strategy1, mut strategy2) = match (
        create_strategy(strategy1_spec),
        create_strategy(strategy2_spec),
    ) {
        (Ok(s1), Ok(s2)) => (s1, s2),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {}", e);
            print_usage();
            return;
        }
    };

    if !json {
        println!(
            "=== Simulation: {} vs {} ===",
            strategy1.name(),
            strategy2.name()
        );
        println!("Games: {}", config.num_games);
        println!();
    }

    let runner = MatchRunner::new(config);
    let tally = match runner.run_match(strategy1.as_mut(), strategy2.as_mut()) {
        Ok(tally) => tally,
        Err(StrategyError::InputClosed) => {
            eprintln!("Input stream closed, aborting the simulation");
            return;
        }
    };

    if json {
        match tally.to_json() {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Error: {}", e),
        }
    } else {
        println!(
            "{}",
            tally.probability_report(strategy1.name(), strategy2.name())
        );
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "play" => run_play(&args[2..]),
        "simulate" | "sim" => run_simulate(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
