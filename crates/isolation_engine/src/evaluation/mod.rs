//! Position evaluation
//!
//! Heuristic scoring of non-terminal positions. The searcher resolves
//! terminal positions through `GameState::utility` and only consults the
//! evaluator below the depth limit, so evaluators never see a decided game
//! and must return strictly finite scores.
//!
//! ## Module Organization
//!
//! - `mobility` - Move-count heuristics for isolation-style games

mod mobility;

pub use mobility::{aggressive_mobility, improved_mobility, open_moves};

use crate::game::GameState;
use crate::types::{Player, Score};

/// A pure scoring function over non-terminal positions.
///
/// Contract: no side effects, finite output, evaluated from the point of
/// view of `player` (the original searching player, not whoever is active
/// at the evaluated ply). Execution time counts against the shared search
/// budget; the evaluator itself does not query the clock.
pub trait Evaluator<S: GameState> {
    fn score(&self, state: &S, player: Player) -> Score;
}

/// Any plain `fn(&S, Player) -> Score` or closure is an evaluator.
impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, Player) -> Score,
{
    fn score(&self, state: &S, player: Player) -> Score {
        self(state, player)
    }
}
