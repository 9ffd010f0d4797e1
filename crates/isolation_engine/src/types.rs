//! Core types for adversarial search
//!
//! Defines the small, copyable values the engine passes between frames:
//! player identities, board coordinates, and scores.
//!
//! ## Score Semantics
//!
//! Scores are `f64`. The infinities are reserved for *resolved* terminal
//! outcomes: [`WIN`] and [`LOSS`] are only ever produced by
//! [`GameState::utility`](crate::GameState::utility). Heuristic evaluators
//! must return strictly finite values so a good-but-undecided position can
//! never be confused with a proven win or loss.

use std::fmt;

/// Evaluation score. Finite for heuristic values, infinite only for
/// resolved terminal utility.
pub type Score = f64;

/// Utility of a position the searching player has won.
pub const WIN: Score = f64::INFINITY;

/// Utility of a position the searching player has lost.
pub const LOSS: Score = f64::NEG_INFINITY;

/// One of the two sides in a zero-sum game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// A board coordinate pair, or the reserved "no legal move" sentinel.
///
/// The sentinel is what `get_move` returns when the position has no legal
/// moves or when the deadline expired before any depth completed. Callers
/// must check [`Move::is_none`] before acting on a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: i8,
    pub col: i8,
}

impl Move {
    /// Sentinel value meaning "no legal move".
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub fn new(row: i8, col: i8) -> Self {
        Move { row, col }
    }

    /// True if this is the "no legal move" sentinel.
    pub fn is_none(&self) -> bool {
        *self == Move::NONE
    }

    /// True if this is an actual board coordinate.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NONE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "(none)")
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_an_involution() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent(), Player::First);
        assert_eq!(Player::First.opponent().opponent(), Player::First);
    }

    #[test]
    fn test_sentinel_move_roundtrip() {
        assert!(Move::NONE.is_none());
        assert!(Move::default().is_none());
        assert!(Move::new(0, 0).is_some());
        assert_eq!(Move::NONE.to_string(), "(none)");
        assert_eq!(Move::new(2, 5).to_string(), "(2, 5)");
    }
}
