//! Head-to-head arena for isolation agents
//!
//! Plays the iterative-deepening alpha-beta agent against a fixed-depth
//! minimax opponent under a per-move wall-clock budget and reports the
//! tally. Sides alternate between games so neither agent keeps the
//! first-move advantage.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use isolation_board::Board;
use isolation_engine::{
    evaluation, AlphaBetaAgent, Evaluator, GameState, MinimaxAgent, Player, Score,
};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

type Heuristic = fn(&Board, Player) -> Score;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    /// Own mobility only.
    Open,
    /// Own mobility minus opponent mobility.
    Improved,
    /// Own mobility minus twice opponent mobility.
    Aggressive,
}

impl HeuristicArg {
    fn as_fn(self) -> Heuristic {
        match self {
            HeuristicArg::Open => evaluation::open_moves,
            HeuristicArg::Improved => evaluation::improved_mobility,
            HeuristicArg::Aggressive => evaluation::aggressive_mobility,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arena", about = "Isolation agent arena")]
struct Args {
    /// Number of games to play.
    #[arg(long, default_value_t = 20)]
    games: u32,

    /// Wall-clock budget per move, in milliseconds.
    #[arg(long, default_value_t = 150)]
    time_ms: u64,

    /// Safety margin the agents keep before the deadline, in milliseconds.
    #[arg(long, default_value_t = 10)]
    threshold_ms: u64,

    /// Search depth of the fixed-depth minimax opponent.
    #[arg(long, default_value_t = 3)]
    minimax_depth: u32,

    /// Board side length (1-8).
    #[arg(long, default_value_t = 7)]
    size: u8,

    /// Heuristic of the alpha-beta agent.
    #[arg(long, value_enum, default_value_t = HeuristicArg::Aggressive)]
    heuristic: HeuristicArg,

    /// Heuristic of the minimax opponent.
    #[arg(long, value_enum, default_value_t = HeuristicArg::Improved)]
    opponent_heuristic: HeuristicArg,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let threshold = Duration::from_millis(args.threshold_ms);
    let alphabeta = AlphaBetaAgent::new(args.heuristic.as_fn()).with_threshold(threshold);
    let minimax = MinimaxAgent::new(args.minimax_depth, args.opponent_heuristic.as_fn())
        .with_threshold(threshold);

    let mut rng = rand::rng();
    let mut alphabeta_wins = 0u32;
    let mut minimax_wins = 0u32;

    for game in 0..args.games {
        let alphabeta_is_first = game % 2 == 0;
        let alphabeta_won = play_game(&alphabeta, &minimax, alphabeta_is_first, &args, &mut rng)?;
        if alphabeta_won {
            alphabeta_wins += 1;
        } else {
            minimax_wins += 1;
        }
        info!(game = game + 1, alphabeta_wins, minimax_wins, "game finished");
    }

    info!(
        alphabeta_wins,
        minimax_wins,
        games = args.games,
        "arena complete"
    );
    Ok(())
}

/// Play one game; returns true if the alpha-beta agent won.
fn play_game<E1, E2>(
    alphabeta: &AlphaBetaAgent<E1>,
    minimax: &MinimaxAgent<E2>,
    alphabeta_is_first: bool,
    args: &Args,
    rng: &mut impl Rng,
) -> Result<bool>
where
    E1: Evaluator<Board>,
    E2: Evaluator<Board>,
{
    let mut board = Board::with_size(args.size, args.size);

    // Random opening placement for both pieces keeps games varied.
    for _ in 0..2 {
        let moves = board.legal_moves(board.active_player());
        let opening = moves
            .choose(rng)
            .copied()
            .expect("an empty board always has placement moves");
        board.apply_move(opening)?;
    }

    let budget = Duration::from_millis(args.time_ms);
    loop {
        let active = board.active_player();
        let alphabeta_to_move = (active == Player::First) == alphabeta_is_first;

        let start = Instant::now();
        let time_left = || budget.saturating_sub(start.elapsed());
        let mv = if alphabeta_to_move {
            alphabeta.get_move(&board, time_left)?
        } else {
            minimax.get_move(&board, time_left)?
        };

        if start.elapsed() > budget {
            // Returning after the budget is a contract violation on the
            // agent's side; the arena scores it as a forfeit.
            warn!(elapsed = ?start.elapsed(), "agent overran its budget, forfeiting");
            return Ok(!alphabeta_to_move);
        }

        if mv.is_none() {
            debug!(loser = ?active, moves = board.move_count(), "no move returned");
            return Ok(!alphabeta_to_move);
        }

        board.apply_move(mv)?;

        if board.is_loser(board.active_player()) {
            debug!(moves = board.move_count(), board = %board, "game over");
            return Ok(alphabeta_to_move);
        }
    }
}
