//! Time budget monitor
//!
//! The sole cancellation primitive in the engine. The clock wraps the
//! caller's zero-argument remaining-time query together with a configured
//! threshold. Every recursive search call and every deepening iteration
//! checks it before doing further work. Cancellation is cooperative; no
//! background timer interrupts the search.

use crate::error::{SearchError, SearchResult};
use std::time::Duration;

/// Monitors the remaining wall-clock budget for one `get_move` call.
pub struct SearchClock<'a> {
    time_left: &'a dyn Fn() -> Duration,
    threshold: Duration,
}

impl<'a> SearchClock<'a> {
    /// Wrap a remaining-time query with a cancellation threshold.
    ///
    /// `threshold` is the safety margin: the search aborts while that much
    /// time still remains so the driver can unwind and return in time.
    pub fn new(time_left: &'a dyn Fn() -> Duration, threshold: Duration) -> Self {
        SearchClock {
            time_left,
            threshold,
        }
    }

    /// Remaining time as reported by the caller's query.
    pub fn remaining(&self) -> Duration {
        (self.time_left)()
    }

    /// Signal deadline-exceeded once remaining time is at or below the
    /// threshold.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DeadlineExceeded`] when the budget is
    /// exhausted. Callers propagate it unmodified with `?`.
    pub fn checkpoint(&self) -> SearchResult<()> {
        if self.remaining() <= self.threshold {
            Err(SearchError::DeadlineExceeded)
        } else {
            Ok(())
        }
    }
}
