//! Fixed-depth minimax search
//!
//! Explores exactly `depth` plies with no pruning. Too slow for play at
//! interesting depths, but every node's value is computed exhaustively,
//! which is what makes it the correctness oracle for the alpha-beta
//! searcher: at equal depth on equal inputs the two must return equal
//! values.

use crate::clock::SearchClock;
use crate::error::{SearchError, SearchResult};
use crate::evaluation::Evaluator;
use crate::game::GameState;
use crate::types::{Move, Player, Score, LOSS, WIN};
use std::time::Duration;

/// One unpruned minimax search to `depth` plies.
///
/// Returns the first move achieving the maximum value (left-to-right
/// tie-break) and that value for the active player. The sentinel move is
/// returned when the position has no legal moves.
///
/// # Errors
///
/// Propagates [`SearchError::DeadlineExceeded`] from any recursion depth and
/// [`SearchError::InvalidMove`] on a state collaborator contract violation.
pub fn minimax<S, E>(
    state: &S,
    depth: u32,
    clock: &SearchClock<'_>,
    evaluator: &E,
) -> SearchResult<(Move, Score)>
where
    S: GameState,
    E: Evaluator<S>,
{
    clock.checkpoint()?;

    let player = state.active_player();
    let moves = state.legal_moves(player);
    if moves.is_empty() {
        return Ok((Move::NONE, state.utility(player)));
    }
    if depth == 0 {
        return Ok((Move::NONE, evaluator.score(state, player)));
    }

    let mut best_move = moves[0];
    let mut best_value = LOSS;
    for mv in moves {
        let child = state.forecast_move(mv)?;
        let value = min_value(&child, depth - 1, player, clock, evaluator)?;
        if value > best_value {
            best_value = value;
            best_move = mv;
        }
    }

    Ok((best_move, best_value))
}

fn min_value<S, E>(
    state: &S,
    depth: u32,
    player: Player,
    clock: &SearchClock<'_>,
    evaluator: &E,
) -> SearchResult<Score>
where
    S: GameState,
    E: Evaluator<S>,
{
    clock.checkpoint()?;

    let moves = state.legal_moves(state.active_player());
    if moves.is_empty() {
        return Ok(state.utility(player));
    }
    if depth == 0 {
        return Ok(evaluator.score(state, player));
    }

    let mut value = WIN;
    for mv in moves {
        let child = state.forecast_move(mv)?;
        value = value.min(max_value(&child, depth - 1, player, clock, evaluator)?);
    }
    Ok(value)
}

fn max_value<S, E>(
    state: &S,
    depth: u32,
    player: Player,
    clock: &SearchClock<'_>,
    evaluator: &E,
) -> SearchResult<Score>
where
    S: GameState,
    E: Evaluator<S>,
{
    clock.checkpoint()?;

    let moves = state.legal_moves(state.active_player());
    if moves.is_empty() {
        return Ok(state.utility(player));
    }
    if depth == 0 {
        return Ok(evaluator.score(state, player));
    }

    let mut value = LOSS;
    for mv in moves {
        let child = state.forecast_move(mv)?;
        value = value.max(min_value(&child, depth - 1, player, clock, evaluator)?);
    }
    Ok(value)
}

/// Game-playing agent that chooses a move with fixed-depth minimax.
pub struct MinimaxAgent<E> {
    /// Number of plies to explore on every call.
    pub search_depth: u32,
    /// Remaining-time margin below which the search aborts.
    pub timeout_threshold: Duration,
    evaluator: E,
}

impl<E> MinimaxAgent<E> {
    /// Default safety margin before the caller's deadline.
    pub const DEFAULT_THRESHOLD: Duration = Duration::from_millis(10);

    pub fn new(search_depth: u32, evaluator: E) -> Self {
        MinimaxAgent {
            search_depth,
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
    /// `time_left` is the caller's zero-argument remaining-time query.
    /// Returns the sentinel move if the position has no legal moves or if
    /// the deadline expired before the fixed-depth search finished.
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
        match minimax(state, self.search_depth, &clock, &self.evaluator) {
            Ok((mv, _)) => Ok(mv),
            Err(SearchError::DeadlineExceeded) => Ok(Move::NONE),
            Err(err) => Err(err),
        }
    }
}
