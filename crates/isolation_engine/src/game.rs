//! Game state interface consumed by the search engine
//!
//! The engine never inspects a position directly; everything it needs is
//! behind this trait. Implementations are logically immutable: forecasting a
//! move returns a fresh state and never mutates the receiver, so sibling
//! subtrees can be explored without synchronization or rollback.

use crate::error::SearchResult;
use crate::types::{Move, Player, Score};

/// An immutable two-player, perfect-information, zero-sum game position.
///
/// Move enumeration must be deterministic. `legal_moves` returns moves in a
/// stable "natural" order, and the search breaks ties left to right, so the
/// chosen move is deterministic as well.
pub trait GameState: Sized {
    /// The player whose turn it is in this position.
    fn active_player(&self) -> Player;

    /// Legal moves for `player`, in natural order. Empty if none available.
    fn legal_moves(&self, player: Player) -> Vec<Move>;

    /// The position after `player` makes `mv`, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidMove`](crate::SearchError::InvalidMove)
    /// if `mv` is not currently legal. The engine never triggers this since
    /// it only forecasts moves it just enumerated.
    fn forecast_move(&self, mv: Move) -> SearchResult<Self>;

    /// True if `player` has won this game.
    fn is_winner(&self, player: Player) -> bool;

    /// True if `player` has lost this game.
    fn is_loser(&self, player: Player) -> bool;

    /// Terminal outcome for `player`: [`WIN`](crate::WIN) if `player` has
    /// won, [`LOSS`](crate::LOSS) if `player` has lost, `0.0` otherwise.
    fn utility(&self, player: Player) -> Score;
}
