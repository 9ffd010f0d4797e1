//! Time-bounded adversarial game-tree search
//!
//! Iterative-deepening minimax search with alpha-beta pruning over any
//! two-player, perfect-information, zero-sum game, driven by a pluggable
//! position evaluator and a wall-clock deadline.
//!
//! The engine is single-threaded and synchronous. Cancellation is
//! cooperative: every recursive call checks the [`SearchClock`], and a
//! deadline signal unwinds as a [`SearchError::DeadlineExceeded`] result
//! through every active frame back to the deepening driver, which falls back
//! to the last fully completed depth. Partial work is never surfaced as a
//! final answer.
//!
//! Plug in a game by implementing [`GameState`]; plug in scoring with any
//! `Fn(&S, Player) -> Score` (see [`Evaluator`]).
//!
//! ```no_run
//! use isolation_engine::{evaluation, AlphaBetaAgent};
//! # use isolation_engine::{GameState, Move, Player, Score, SearchResult};
//! # #[derive(Clone)] struct Board;
//! # impl GameState for Board {
//! #     fn active_player(&self) -> Player { Player::First }
//! #     fn legal_moves(&self, _: Player) -> Vec<Move> { vec![] }
//! #     fn forecast_move(&self, _: Move) -> SearchResult<Self> { Ok(Board) }
//! #     fn is_winner(&self, _: Player) -> bool { false }
//! #     fn is_loser(&self, _: Player) -> bool { false }
//! #     fn utility(&self, _: Player) -> Score { 0.0 }
//! # }
//! # fn remaining() -> std::time::Duration { std::time::Duration::ZERO }
//! let board = Board;
//! let agent = AlphaBetaAgent::new(evaluation::improved_mobility);
//! let chosen = agent.get_move(&board, remaining)?;
//! if chosen.is_none() {
//!     // no legal moves, or the deadline expired before depth 1 completed
//! }
//! # Ok::<(), isolation_engine::SearchError>(())
//! ```

mod clock;
mod error;
pub mod evaluation;
mod game;
mod search;
mod types;

pub use clock::SearchClock;
pub use error::{SearchError, SearchResult};
pub use evaluation::Evaluator;
pub use game::GameState;
pub use search::{alphabeta, minimax, AlphaBetaAgent, MinimaxAgent, MoveSelector};
pub use types::{Move, Player, Score, LOSS, WIN};
