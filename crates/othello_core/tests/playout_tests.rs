//! Whole-game playouts with uniformly random move choice. Games are
//! independent, so the batch runs one-game-per-task on the rayon pool;
//! seeding by game index keeps the suite deterministic.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use othello_core::{legal_moves_into, Game, Mobility, Outcome, Player};

const GAMES: u64 = 200;

fn random_playout(seed: u64) -> Outcome {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    let mut moves = Vec::new();

    while let Some(side) = game.to_move() {
        legal_moves_into(game.board(), side, &mut moves);
        let mv = moves
            .choose(&mut rng)
            .copied()
            .expect("side to move always has a legal move");
        assert!(game.apply_move(mv.row, mv.col));

        let total = game.count(Player::Dark)
            + game.count(Player::Light)
            + game.board().empty_count();
        assert_eq!(total, 64, "token conservation violated mid-game");
    }

    // Game over must coincide with neither side having a move anywhere.
    assert!(game.is_over());
    assert_eq!(game.board().mobility(), Mobility::Neither);
    game.outcome().expect("finished game has an outcome")
}

#[test]
fn random_playouts_terminate_with_sane_win_rates() {
    let outcomes: Vec<Outcome> = (0..GAMES).into_par_iter().map(random_playout).collect();

    let dark = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Winner(Player::Dark)))
        .count() as u64;
    let light = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Winner(Player::Light)))
        .count() as u64;
    let draws = GAMES - dark - light;

    // Sanity bounds, not exact values: under random play the first mover
    // wins some games and loses some.
    assert!(dark > 0 && dark < GAMES, "dark won {}/{}", dark, GAMES);
    assert!(light > 0 && light < GAMES, "light won {}/{}", light, GAMES);
    assert_eq!(dark + light + draws, GAMES);
}
