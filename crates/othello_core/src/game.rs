use crate::board::{Board, Mobility};
use crate::types::Player;

/// Terminal result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// One Othello game: a board plus whose turn it is.
///
/// `to_move` is only ever a player with at least one legal move; `None`
/// means the game is over. Dark moves first.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Option<Player>,
}

impl Game {
    /// Side of the standard board.
    pub const DIMENSION: usize = 8;

    /// A fresh standard game.
    pub fn new() -> Self {
        Game {
            board: Board::standard(Self::DIMENSION),
            to_move: Some(Player::Dark),
        }
    }

    /// A game starting from an arbitrary board position. The side to move
    /// is Dark when Dark has a legal move, otherwise Light, otherwise the
    /// game is already over.
    pub fn with_board(board: Board) -> Self {
        let to_move = match board.mobility() {
            Mobility::Both | Mobility::Dark => Some(Player::Dark),
            Mobility::Light => Some(Player::Light),
            Mobility::Neither => None,
        };
        Game { board, to_move }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dim(&self) -> usize {
        self.board.dim()
    }

    pub fn to_move(&self) -> Option<Player> {
        self.to_move
    }

    pub fn count(&self, player: Player) -> usize {
        self.board.count(player)
    }

    /// Attempt a move for the side to move at (row, col). On success the
    /// turn passes to the opponent if they can answer, stays with the
    /// mover if only they can (forced pass), or ends the game when
    /// neither side has a move. Returns false, leaving all state
    /// unchanged, for an illegal move or a finished game.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        let mover = match self.to_move {
            Some(p) => p,
            None => return false,
        };
        if !self.board.apply_move(row, col, mover) {
            return false;
        }
        self.to_move = match self.board.mobility() {
            Mobility::Both => Some(mover.other()),
            Mobility::Dark => Some(Player::Dark),
            Mobility::Light => Some(Player::Light),
            Mobility::Neither => None,
        };
        true
    }

    /// Whether neither player has any legal move left.
    pub fn is_over(&self) -> bool {
        self.to_move.is_none()
    }

    /// The final result, None while the game is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        let dark = self.board.count(Player::Dark);
        let light = self.board.count(Player::Light);
        Some(if dark > light {
            Outcome::Winner(Player::Dark)
        } else if light > dark {
            Outcome::Winner(Player::Light)
        } else {
            Outcome::Draw
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Dark can capture along row 0 and, via the (2,1) token, down to
    // (3,0); Light has no reply anywhere once row 0 is closed.
    fn forced_pass_board() -> Board {
        let mut b = Board::new(4);
        b.set(0, 0, Some(Player::Dark));
        b.set(0, 1, Some(Player::Light));
        b.set(2, 0, Some(Player::Dark));
        b.set(2, 1, Some(Player::Light));
        b.set(2, 2, Some(Player::Dark));
        b.set(2, 3, Some(Player::Dark));
        b.set(3, 0, Some(Player::Dark));
        b
    }

    #[test]
    fn new_game_starts_with_dark() {
        let game = Game::new();
        assert_eq!(game.to_move(), Some(Player::Dark));
        assert!(!game.is_over());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn illegal_move_changes_nothing() {
        let mut game = Game::new();
        assert!(!game.apply_move(0, 0));
        assert_eq!(game.to_move(), Some(Player::Dark));
        assert_eq!(game.count(Player::Dark), 2);
        assert_eq!(game.count(Player::Light), 2);
    }

    #[test]
    fn legal_move_passes_turn_when_opponent_can_answer() {
        let mut game = Game::new();
        assert!(game.apply_move(2, 4));
        assert_eq!(game.to_move(), Some(Player::Light));
    }

    #[test]
    fn forced_pass_keeps_the_mover() {
        let mut game = Game::with_board(forced_pass_board());
        assert_eq!(game.to_move(), Some(Player::Dark));

        // Closing row 0 leaves Light with no reply but Dark still has
        // (1,2), so the turn must not pass.
        assert!(game.apply_move(0, 2));
        assert_eq!(game.to_move(), Some(Player::Dark));
    }

    #[test]
    fn game_ends_when_neither_side_can_move() {
        let mut game = Game::with_board(forced_pass_board());
        assert!(game.apply_move(0, 2));
        assert!(game.apply_move(1, 2));

        // The last Light token flipped, so no captures remain for anyone.
        assert!(game.is_over());
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::Dark)));
        assert!(!game.apply_move(3, 3));
    }

    #[test]
    fn equal_counts_draw() {
        // Two disjoint closed rows, one per player, no moves for either.
        let mut b = Board::new(4);
        for col in 0..4 {
            b.set(0, col, Some(Player::Dark));
            b.set(3, col, Some(Player::Light));
        }
        let game = Game::with_board(b);
        assert!(game.is_over());
        assert_eq!(game.outcome(), Some(Outcome::Draw));
    }
}
