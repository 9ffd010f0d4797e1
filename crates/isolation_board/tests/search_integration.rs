//! Engine-on-board integration tests
//!
//! Runs both searchers over real isolation positions: oracle agreement,
//! proven-outcome consistency on a board small enough to solve, and the
//! wall-clock contract of the deepening agent.

use isolation_board::Board;
use isolation_engine::{
    alphabeta, evaluation, minimax, AlphaBetaAgent, GameState, MinimaxAgent, Move, Player,
    SearchClock, LOSS, WIN,
};
use std::cell::Cell;
use std::time::{Duration, Instant};

const THRESHOLD: Duration = Duration::from_millis(10);

fn generous() -> Duration {
    Duration::from_secs(3600)
}

/// 7x7 position a few plies in: both pieces placed and moved once.
fn scripted_midgame() -> Board {
    let mut board = Board::new();
    for mv in [
        Move::new(3, 3),
        Move::new(0, 0),
        Move::new(1, 2),
        Move::new(2, 1),
    ] {
        board.apply_move(mv).unwrap();
    }
    board
}

/// 3x3 board with both pieces placed; small enough to solve exactly.
fn tiny_board() -> Board {
    let mut board = Board::with_size(3, 3);
    board.apply_move(Move::new(0, 0)).unwrap();
    board.apply_move(Move::new(2, 2)).unwrap();
    board
}

#[test]
fn alphabeta_agrees_with_the_minimax_oracle() {
    let board = scripted_midgame();
    for depth in 1..=3 {
        let time_left = generous;
        let clock = SearchClock::new(&time_left, THRESHOLD);
        let (mm_move, mm_value) =
            minimax(&board, depth, &clock, &evaluation::improved_mobility).unwrap();
        let (ab_move, ab_value) =
            alphabeta(&board, depth, &clock, &evaluation::improved_mobility).unwrap();
        assert_eq!(mm_value, ab_value, "value mismatch at depth {depth}");
        assert_eq!(mm_move, ab_move, "move mismatch at depth {depth}");
    }
}

#[test]
fn solved_value_matches_the_played_out_result() {
    // Depth 10 exceeds the number of open cells, so the search resolves the
    // position exactly; the value must then predict the playout winner when
    // both sides play the searched moves.
    let mut board = tiny_board();
    let time_left = generous;
    let clock = SearchClock::new(&time_left, THRESHOLD);

    let (_, value) = alphabeta(&board, 10, &clock, &evaluation::improved_mobility).unwrap();
    assert!(
        value == WIN || value == LOSS,
        "a fully resolved position has an infinite value, got {value}"
    );
    let first_should_win = value == WIN;

    let loser = loop {
        let active = board.active_player();
        if board.legal_moves(active).is_empty() {
            break active;
        }
        let (mv, _) = alphabeta(&board, 10, &clock, &evaluation::improved_mobility).unwrap();
        board.apply_move(mv).unwrap();
    };

    assert_eq!(
        first_should_win,
        loser == Player::Second,
        "searched value and playout disagree"
    );
}

#[test]
fn evaluator_only_sees_live_positions_on_a_real_board() {
    let board = tiny_board();
    let calls = Cell::new(0usize);
    let evaluator = |state: &Board, player: Player| {
        assert!(!state.is_winner(player) && !state.is_loser(player));
        assert!(!state.is_winner(player.opponent()) && !state.is_loser(player.opponent()));
        calls.set(calls.get() + 1);
        evaluation::improved_mobility(state, player)
    };

    let time_left = generous;
    let clock = SearchClock::new(&time_left, THRESHOLD);
    alphabeta(&board, 4, &clock, &evaluator).unwrap();
    assert!(calls.get() > 0, "depth-limited search must use the evaluator");
}

#[test]
fn deepening_agent_returns_a_legal_move_within_budget() {
    let board = scripted_midgame();
    let agent = AlphaBetaAgent::new(evaluation::aggressive_mobility).with_threshold(THRESHOLD);

    let budget = Duration::from_millis(100);
    let start = Instant::now();
    let time_left = move || budget.saturating_sub(start.elapsed());

    let mv = agent.get_move(&board, time_left).unwrap();
    assert!(
        board.legal_moves(board.active_player()).contains(&mv),
        "agent must return a currently legal move, got {mv}"
    );
    assert!(
        start.elapsed() < budget + Duration::from_millis(50),
        "agent must come back around the deadline"
    );
}

#[test]
fn fixed_depth_agent_plays_the_placement_phase() {
    let board = Board::new();
    let agent = MinimaxAgent::new(2, evaluation::open_moves).with_threshold(THRESHOLD);
    let mv = agent.get_move(&board, generous).unwrap();
    assert!(mv.is_some());
    assert!(board.legal_moves(Player::First).contains(&mv));
}
