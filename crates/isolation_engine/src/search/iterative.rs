//! Iterative deepening driver
//!
//! Repeats a full-window alpha-beta search at successively greater depth
//! limits until the time budget runs out. A depth that completes commits its
//! move to the selector; a depth interrupted by the deadline is discarded in
//! its entirety. This is the single place in the engine where
//! `DeadlineExceeded` is caught.

use super::alphabeta::alphabeta;
use super::selector::MoveSelector;
use crate::clock::SearchClock;
use crate::error::{SearchError, SearchResult};
use crate::evaluation::Evaluator;
use crate::game::GameState;
use crate::types::Move;
use std::time::Duration;
use tracing::debug;

/// Game-playing agent that chooses a move using iterative-deepening
/// alpha-beta search.
pub struct AlphaBetaAgent<E> {
    /// Remaining-time margin below which the search aborts.
    pub timeout_threshold: Duration,
    evaluator: E,
}

impl<E> AlphaBetaAgent<E> {
    /// Default safety margin before the caller's deadline.
    pub const DEFAULT_THRESHOLD: Duration = Duration::from_millis(10);

    pub fn new(evaluator: E) -> Self {
        AlphaBetaAgent {
            timeout_threshold: Self::DEFAULT_THRESHOLD,
            evaluator,
        }
    }

    pub fn with_threshold(mut self, threshold: Duration) -> Self {
        self.timeout_threshold = threshold;
        self
    }

    /// Search for the best move and return before the time budget runs out.
    ///
    /// Starts at depth 1 and deepens while remaining time exceeds the
    /// threshold. Returns the move from the deepest fully completed depth,
    /// or the sentinel if no depth completed (including the case where the
    /// very first clock query already reports the budget exhausted).
    ///
    /// # Errors
    ///
    /// Only [`SearchError::InvalidMove`], which indicates a broken
    /// `GameState` implementation. Deadline expiry is handled here and never
    /// escapes.
    pub fn get_move<S>(&self, state: &S, time_left: impl Fn() -> Duration) -> SearchResult<Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let clock = SearchClock::new(&time_left, self.timeout_threshold);
        let mut selector = MoveSelector::new();
        let mut depth = 1;

        while clock.checkpoint().is_ok() {
            match alphabeta(state, depth, &clock, &self.evaluator) {
                Ok((mv, value)) => {
                    debug!(depth, value, best = %mv, "completed depth");
                    selector.commit(mv, depth);
                    if mv.is_none() {
                        // No legal moves at the root; deepening cannot help.
                        break;
                    }
                    depth += 1;
                }
                // The in-flight depth is discarded whole; the selector still
                // holds the last completed depth's result.
                Err(SearchError::DeadlineExceeded) => break,
                Err(err) => return Err(err),
            }
        }

        Ok(selector.best())
    }
}
