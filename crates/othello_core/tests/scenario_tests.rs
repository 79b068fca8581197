//! Mid-game scenario fixtures exercising legality, capture geometry, and
//! the greedy search together on one position.

use othello_core::{Board, Move, Player};

/// Six scripted moves from the standard start. The resulting position:
///
/// ```text
///    0 1 2 3 4 5 6 7
/// 1 | | | | |O| | | |
/// 2 | | | |O|O|X|X| |
/// 3 | | | |X|O| | | |
/// 4 | | |X|X|X| | | |
/// ```
fn midgame_board() -> Board {
    let mut b = Board::standard(8);
    let script = [
        (2, 4, Player::Dark),
        (2, 5, Player::Light),
        (2, 6, Player::Dark),
        (2, 3, Player::Light),
        (4, 2, Player::Dark),
        (1, 4, Player::Light),
    ];
    for (row, col, player) in script {
        assert!(b.apply_move(row, col, player));
    }
    b
}

#[test]
fn midgame_position_is_reached_exactly() {
    let b = midgame_board();
    assert_eq!(b.get(1, 4), Some(Player::Light));
    assert_eq!(b.get(2, 3), Some(Player::Light));
    assert_eq!(b.get(2, 4), Some(Player::Light));
    assert_eq!(b.get(2, 5), Some(Player::Dark));
    assert_eq!(b.get(2, 6), Some(Player::Dark));
    assert_eq!(b.get(3, 3), Some(Player::Dark));
    assert_eq!(b.get(3, 4), Some(Player::Light));
    assert_eq!(b.get(4, 2), Some(Player::Dark));
    assert_eq!(b.get(4, 3), Some(Player::Dark));
    assert_eq!(b.get(4, 4), Some(Player::Dark));
    assert_eq!(b.count(Player::Dark), 6);
    assert_eq!(b.count(Player::Light), 4);
}

#[test]
fn midgame_legality() {
    let b = midgame_board();
    assert!(!b.legal_move(2, 2, Player::Light));
    assert!(b.legal_move(2, 2, Player::Dark));
    assert!(b.legal_move(5, 4, Player::Light));
    assert!(!b.legal_move(0, 0, Player::Dark));
    assert!(!b.legal_move(0, 0, Player::Light));
    // occupied for either side
    assert!(!b.legal_move(2, 3, Player::Dark));
    assert!(!b.legal_move(2, 3, Player::Light));
    // legality checks leave the probed cells empty
    assert_eq!(b.get(2, 2), None);
    assert_eq!(b.get(5, 4), None);
}

#[test]
fn midgame_greedy_choices() {
    let b = midgame_board();
    // Dark's (0,4) swallows the whole column-4 run: three flips plus the
    // placed token.
    assert_eq!(b.greedy_move(Player::Dark), Some((Move::new(0, 4), 4)));
    assert_eq!(b.greedy_move(Player::Light), Some((Move::new(2, 7), 3)));
    // The search itself never places anything.
    assert_eq!(b.get(0, 4), None);
    assert_eq!(b.get(2, 7), None);
}

#[test]
fn greedy_tracks_the_position_as_it_develops() {
    let mut b = midgame_board();
    assert!(b.apply_move(0, 4, Player::Dark));
    assert!(b.apply_move(2, 7, Player::Light));

    assert_eq!(b.greedy_move(Player::Dark), Some((Move::new(1, 2), 2)));
    assert_eq!(b.greedy_move(Player::Light), Some((Move::new(5, 1), 3)));
}
