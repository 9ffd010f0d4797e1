//! Mobility heuristics
//!
//! Scores a position by comparing how many moves each side has available.
//! All three return finite values; win/loss detection is the searcher's job.

use crate::game::GameState;
use crate::types::{Player, Score};

/// Number of moves open to `player`.
pub fn open_moves<S: GameState>(state: &S, player: Player) -> Score {
    state.legal_moves(player).len() as Score
}

/// Own mobility minus opponent mobility.
pub fn improved_mobility<S: GameState>(state: &S, player: Player) -> Score {
    let own = state.legal_moves(player).len() as Score;
    let opponent = state.legal_moves(player.opponent()).len() as Score;
    own - opponent
}

/// Own mobility minus twice the opponent's. Weighting the opponent's
/// freedom double makes the agent favor moves that crowd the opponent.
pub fn aggressive_mobility<S: GameState>(state: &S, player: Player) -> Score {
    let own = state.legal_moves(player).len() as Score;
    let opponent = state.legal_moves(player.opponent()).len() as Score;
    own - 2.0 * opponent
}
