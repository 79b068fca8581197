use std::fmt;

use crate::types::*;

/// Which side has at least one legal move somewhere on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mobility {
    Both,
    Dark,
    Light,
    Neither,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dim: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// An empty board of side `dim`.
    pub fn new(dim: usize) -> Self {
        assert!(dim >= 2, "board side must be at least 2");
        Board {
            dim,
            cells: vec![None; dim * dim],
        }
    }

    /// A board with the canonical starting pattern: Dark on the main
    /// diagonal of the four center cells, Light on the anti-diagonal.
    pub fn standard(dim: usize) -> Self {
        assert!(dim % 2 == 0, "starting pattern needs an even side");
        let mut b = Board::new(dim);
        let mid = dim / 2;
        b.cells[(mid - 1) * dim + (mid - 1)] = Some(Player::Dark);
        b.cells[mid * dim + mid] = Some(Player::Dark);
        b.cells[mid * dim + (mid - 1)] = Some(Player::Light);
        b.cells[(mid - 1) * dim + mid] = Some(Player::Light);
        b
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Flat index for signed coordinates, None when off the board.
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let dim = self.dim as i32;
        if (0..dim).contains(&row) && (0..dim).contains(&col) {
            Some(row as usize * self.dim + col as usize)
        } else {
            None
        }
    }

    fn at(&self, row: i32, col: i32) -> Option<Player> {
        self.index(row, col).and_then(|i| self.cells[i])
    }

    /// Token at (row, col); out-of-range reads return None rather than
    /// panicking.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.at(row as i32, col as i32)
    }

    /// Overwrite a cell. (row, col) must be on the board.
    pub fn set(&mut self, row: usize, col: usize, cell: Option<Player>) {
        let i = self
            .index(row as i32, col as i32)
            .expect("cell out of range");
        self.cells[i] = cell;
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Number of opponent tokens that would flip along (dr, dc) starting
    /// one step from the origin. Zero means the ray captures nothing:
    /// either the run is empty, or it ends off-board or on an empty cell
    /// before reaching one of `player`'s tokens.
    fn ray_captures(&self, row: i32, col: i32, dr: i32, dc: i32, player: Player) -> usize {
        let mut r = row + dr;
        let mut c = col + dc;
        let mut run = 0;
        loop {
            match self.at(r, c) {
                Some(p) if p == player => return run,
                Some(_) => run += 1,
                None => return 0,
            }
            r += dr;
            c += dc;
        }
    }

    /// Whether placing `player` at (row, col) is a valid move: the cell is
    /// an empty on-board cell and at least one of the 8 rays captures.
    /// Out-of-range coordinates are never legal.
    pub fn legal_move(&self, row: usize, col: usize, player: Player) -> bool {
        let (r, c) = (row as i32, col as i32);
        let origin = match self.index(r, c) {
            Some(i) => i,
            None => return false,
        };
        if self.cells[origin].is_some() {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.ray_captures(r, c, dr, dc, player) > 0)
    }

    /// Place `player` at (row, col) and flip every captured run, per
    /// Othello rules. Returns whether the move was applied; an illegal
    /// move leaves the board untouched.
    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) -> bool {
        if !self.legal_move(row, col, player) {
            return false;
        }
        let (r, c) = (row as i32, col as i32);
        for &(dr, dc) in &DIRECTIONS {
            let run = self.ray_captures(r, c, dr, dc, player);
            let mut fr = r + dr;
            let mut fc = c + dc;
            for _ in 0..run {
                let i = self.index(fr, fc).unwrap();
                self.cells[i] = Some(player);
                fr += dr;
                fc += dc;
            }
        }
        let origin = self.index(r, c).unwrap();
        self.cells[origin] = Some(player);
        true
    }

    /// Scan the whole board for either side's legal moves. Used to detect
    /// forced passes and game over.
    pub fn mobility(&self) -> Mobility {
        let mut dark = false;
        let mut light = false;
        for row in 0..self.dim {
            for col in 0..self.dim {
                dark = dark || self.legal_move(row, col, Player::Dark);
                light = light || self.legal_move(row, col, Player::Light);
                if dark && light {
                    return Mobility::Both;
                }
            }
        }
        match (dark, light) {
            (true, true) => Mobility::Both,
            (true, false) => Mobility::Dark,
            (false, true) => Mobility::Light,
            (false, false) => Mobility::Neither,
        }
    }

    /// The legal move maximizing `player`'s own token count after the move
    /// (flipped plus placed), with its gain. Strict `>` over the row-major
    /// scan keeps the first candidate on ties: smallest row, then smallest
    /// column. None when `player` has no legal move.
    pub fn greedy_move(&self, player: Player) -> Option<(Move, usize)> {
        let before = self.count(player);
        let mut best: Option<(Move, usize)> = None;
        for row in 0..self.dim {
            for col in 0..self.dim {
                if !self.legal_move(row, col, player) {
                    continue;
                }
                let mut trial = self.clone();
                trial.apply_move(row, col, player);
                let gain = trial.count(player) - before;
                if best.map_or(true, |(_, g)| gain > g) {
                    best = Some((Move::new(row, col), gain));
                }
            }
        }
        best
    }
}

impl fmt::Display for Board {
    /// Fixed-width grid with column headers top and bottom, row headers on
    /// both sides, and `+---+` borders between rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn headers(f: &mut fmt::Formatter<'_>, dim: usize) -> fmt::Result {
            write!(f, "   ")?;
            for col in 0..dim {
                write!(f, " {}  ", col)?;
            }
            writeln!(f)
        }
        fn border(f: &mut fmt::Formatter<'_>, dim: usize) -> fmt::Result {
            write!(f, "  +")?;
            for _ in 0..dim {
                write!(f, "---+")?;
            }
            writeln!(f)
        }

        headers(f, self.dim)?;
        border(f, self.dim)?;
        for row in 0..self.dim {
            write!(f, "{:2}|", row)?;
            for col in 0..self.dim {
                let glyph = self.get(row, col).map_or(' ', Player::glyph);
                write!(f, " {} |", glyph)?;
            }
            writeln!(f, "{:2}", row)?;
            border(f, self.dim)?;
        }
        headers(f, self.dim)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
