//! Error types for the search engine
//!
//! Provides custom error types for search cancellation and game state
//! contract violations.

use crate::types::Move;
use thiserror::Error;

/// Errors that can occur during a search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Remaining time dropped to or below the configured threshold.
    ///
    /// Raised by the clock checkpoint, never retried. It propagates through
    /// every active search frame and is handled exactly once, at the driver,
    /// which falls back to the last fully completed depth's result.
    #[error("search deadline exceeded")]
    DeadlineExceeded,

    /// A forecast was requested for a move outside the current legal set.
    ///
    /// The search only forecasts moves it just enumerated, so this surfacing
    /// indicates a broken `GameState` implementation. Callers should treat it
    /// as fatal.
    #[error("invalid move: {mv} is not legal in this position")]
    InvalidMove { mv: Move },
}

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;
