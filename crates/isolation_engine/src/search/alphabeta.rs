//! Depth-limited alpha-beta search
//!
//! Minimax with fail-hard alpha-beta pruning. The recursion alternates MAX
//! and MIN nodes by ply parity from the root (root = MAX) and threads an
//! `(alpha, beta)` window down the tree: alpha is the best value the
//! maximizing side can already force, beta the best the minimizing side can.
//! The window only ever tightens. `alpha < beta` holds on entry to every
//! node; a node where it would not hold has already been pruned by its
//! caller.
//!
//! Cutoffs are inclusive: a MAX node stops as soon as its running value
//! reaches beta, a MIN node as soon as it reaches alpha. Pruning changes
//! which nodes get visited, never the value returned.
//!
//! Utility and heuristic are always evaluated for the *original* searching
//! player captured at the root, no matter whose turn it is at the evaluated
//! ply.

use crate::clock::SearchClock;
use crate::error::SearchResult;
use crate::evaluation::Evaluator;
use crate::game::GameState;
use crate::types::{Move, Player, Score, LOSS, WIN};
use tracing::trace;

/// One full-window alpha-beta search to `depth` plies.
///
/// Returns the chosen move and its value for the active player. The sentinel
/// move is returned immediately when the position has no legal moves, with
/// the position's utility as the value. Ties between equally good moves
/// break left-to-right, so the result is deterministic.
///
/// # Errors
///
/// Propagates [`SearchError::DeadlineExceeded`](crate::SearchError) from any
/// depth of the recursion without committing partial work, and
/// [`SearchError::InvalidMove`](crate::SearchError) if the state collaborator
/// rejects a move it just enumerated.
pub fn alphabeta<S, E>(
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

    // Root: a MAX node that additionally remembers which move produced the
    // running best value.
    let mut best_move = moves[0];
    let mut best_value = LOSS;
    let mut alpha = LOSS;
    let beta = WIN;

    for mv in moves {
        let child = state.forecast_move(mv)?;
        let value = min_value(&child, depth - 1, alpha, beta, player, clock, evaluator)?;
        if value > best_value {
            best_value = value;
            best_move = mv;
        }
        if best_value >= beta {
            // Only reachable on a proven win at the root's full window.
            break;
        }
        alpha = alpha.max(best_value);
    }

    Ok((best_move, best_value))
}

/// MIN node: the opponent picks the move worst for the searching player.
fn min_value<S, E>(
    state: &S,
    depth: u32,
    alpha: Score,
    mut beta: Score,
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
        value = value.min(max_value(&child, depth - 1, alpha, beta, player, clock, evaluator)?);
        if value <= alpha {
            trace!(depth, value, alpha, "min node cutoff");
            return Ok(value);
        }
        beta = beta.min(value);
    }

    Ok(value)
}

/// MAX node: the searching player picks the move best for themselves.
fn max_value<S, E>(
    state: &S,
    depth: u32,
    mut alpha: Score,
    beta: Score,
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
        value = value.max(min_value(&child, depth - 1, alpha, beta, player, clock, evaluator)?);
        if value >= beta {
            trace!(depth, value, beta, "max node cutoff");
            return Ok(value);
        }
        alpha = alpha.max(value);
    }

    Ok(value)
}
