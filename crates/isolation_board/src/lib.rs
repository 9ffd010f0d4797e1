//! Knight-move isolation board
//!
//! A concrete [`GameState`] implementation for the isolation game: two
//! pieces on a small board move like chess knights, every cell a piece ever
//! occupies becomes permanently blocked, and the player who cannot move on
//! their turn loses.
//!
//! The board is a plain value: `forecast_move` clones and applies, never
//! mutating the receiver, which is exactly the copy-on-write contract the
//! search engine relies on when exploring sibling subtrees.

use isolation_engine::{GameState, Move, Player, Score, SearchError, SearchResult, LOSS, WIN};
use std::fmt;

/// Knight-move offsets, in the fixed order move enumeration uses.
const DIRECTIONS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Default board side length.
pub const DEFAULT_SIZE: u8 = 7;

/// An isolation position.
///
/// Blocked cells are kept in a single `u64` bitboard (one bit per cell), so
/// boards up to 8x8 clone in a handful of machine words. Before a player's
/// first move their piece is off the board and every open cell is a legal
/// placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    blocked: u64,
    locations: [Option<Move>; 2],
    active: Player,
    move_count: u32,
}

impl Board {
    /// Empty board of the default 7x7 size, first player to move.
    pub fn new() -> Self {
        Board::with_size(DEFAULT_SIZE, DEFAULT_SIZE)
    }

    /// Empty board of the given size. Panics if a dimension is zero or
    /// exceeds 8, the bitboard capacity.
    pub fn with_size(width: u8, height: u8) -> Self {
        assert!(
            (1..=8).contains(&width) && (1..=8).contains(&height),
            "board dimensions must be within 1..=8"
        );
        Board {
            width,
            height,
            blocked: 0,
            locations: [None, None],
            active: Player::First,
            move_count: 0,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of half-moves played so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Current location of `player`'s piece, if already placed.
    pub fn location(&self, player: Player) -> Option<Move> {
        self.locations[index(player)]
    }

    /// Apply `mv` for the active player in place. The harness-facing
    /// mutable twin of `forecast_move`.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidMove`] if `mv` is not legal for the active
    /// player.
    pub fn apply_move(&mut self, mv: Move) -> SearchResult<()> {
        if !self.legal_moves(self.active).contains(&mv) {
            return Err(SearchError::InvalidMove { mv });
        }
        self.locations[index(self.active)] = Some(mv);
        self.blocked |= self.cell_bit(mv.row, mv.col);
        self.active = self.active.opponent();
        self.move_count += 1;
        Ok(())
    }

    fn in_bounds(&self, row: i8, col: i8) -> bool {
        (0..self.height as i8).contains(&row) && (0..self.width as i8).contains(&col)
    }

    fn cell_bit(&self, row: i8, col: i8) -> u64 {
        1u64 << (row as u64 * self.width as u64 + col as u64)
    }

    fn is_open(&self, row: i8, col: i8) -> bool {
        self.in_bounds(row, col) && self.blocked & self.cell_bit(row, col) == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl GameState for Board {
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves(&self, player: Player) -> Vec<Move> {
        match self.location(player) {
            // Placement phase: any open cell, row-major order.
            None => {
                let mut moves = Vec::with_capacity((self.width * self.height) as usize);
                for row in 0..self.height as i8 {
                    for col in 0..self.width as i8 {
                        if self.is_open(row, col) {
                            moves.push(Move::new(row, col));
                        }
                    }
                }
                moves
            }
            Some(at) => DIRECTIONS
                .iter()
                .map(|&(dr, dc)| Move::new(at.row + dr, at.col + dc))
                .filter(|mv| self.is_open(mv.row, mv.col))
                .collect(),
        }
    }

    fn forecast_move(&self, mv: Move) -> SearchResult<Self> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    fn is_winner(&self, player: Player) -> bool {
        self.is_loser(player.opponent())
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.legal_moves(player).is_empty()
    }

    fn utility(&self, player: Player) -> Score {
        if self.is_winner(player) {
            WIN
        } else if self.is_loser(player) {
            LOSS
        } else {
            0.0
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as i8 {
            for col in 0..self.width as i8 {
                let at = Move::new(row, col);
                let glyph = if self.location(Player::First) == Some(at) {
                    '1'
                } else if self.location(Player::Second) == Some(at) {
                    '2'
                } else if !self.is_open(row, col) {
                    'x'
                } else {
                    '.'
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn index(player: Player) -> usize {
    match player {
        Player::First => 0,
        Player::Second => 1,
    }
}
