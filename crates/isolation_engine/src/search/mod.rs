//! Adversarial tree search
//!
//! Two searchers over the same `GameState` contract:
//! - Fixed-depth minimax, unpruned. Slow, but its value is trivially
//!   correct, which makes it the oracle the pruned searcher is validated
//!   against.
//! - Iterative-deepening alpha-beta, the engine actually used for play.
//!
//! Both check the search clock at every recursive entry and propagate
//! `DeadlineExceeded` unmodified back to their driver.
//!
//! ## Module Organization
//!
//! - `minimax` - Fixed-depth minimax searcher and agent
//! - `alphabeta` - Depth-limited alpha-beta recursion
//! - `iterative` - Iterative deepening driver and agent
//! - `selector` - Best-move tracking across completed depths

mod alphabeta;
mod iterative;
mod minimax;
mod selector;

pub use alphabeta::alphabeta;
pub use iterative::AlphaBetaAgent;
pub use minimax::{minimax, MinimaxAgent};
pub use selector::MoveSelector;
