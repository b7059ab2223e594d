//! Time-bounded adversarial search for two-player, zero-sum, perfect-information games.
//!
//! Search runs minimax or alpha-beta under iterative deepening against any position
//! implementing `GameState`, stopping when a caller-supplied time probe drops below a
//! safety threshold. `Engine::get_move` is the entry point; `isolation::Board` is a
//! ready-made knight-move Isolation board.

pub mod bitboard;
pub mod coretypes;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod isolation;
pub mod search;
pub mod timeman;

pub use coretypes::{Move, Player};
pub use engine::{Engine, EngineBuilder};
pub use evaluation::{Evaluate, Evaluator};
pub use game::GameState;
pub use isolation::Board;
pub use search::{Method, SearchResult};
