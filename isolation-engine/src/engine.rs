//! Engine struct acts as a simplified API for the various parts of the Isolation engine.

use log::{info, warn};

use crate::coretypes::{Move, PlyKind};
use crate::error::{self, ErrorKind};
use crate::evaluation::{Evaluate, Evaluator};
use crate::game::GameState;
use crate::search::{self, Method, SearchResult};
use crate::timeman::{Deadline, DEFAULT_THRESHOLD_MS};

/// EngineBuilder allows for parameters of an Engine to be set and built once.
///
/// Default values:
///
/// * `depth`: 3, used only when `iterative` is false
/// * `evaluator`: WeightedMobility
/// * `iterative`: true
/// * `method`: Minimax
/// * `threshold_ms`: 10.0
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EngineBuilder {
    depth: PlyKind,
    evaluator: Evaluator,
    iterative: bool,
    method: Method,
    threshold_ms: f64,
}

impl EngineBuilder {
    /// Create a new default EngineBuilder.
    pub fn new() -> Self {
        Self {
            depth: 3,
            evaluator: Evaluator::default(),
            iterative: true,
            method: Method::default(),
            threshold_ms: DEFAULT_THRESHOLD_MS,
        }
    }

    /// Create and return a new Engine.
    pub fn build(&self) -> Engine {
        Engine {
            depth: self.depth,
            evaluator: self.evaluator,
            iterative: self.iterative,
            method: self.method,
            threshold_ms: self.threshold_ms,
        }
    }

    /// Set the depth of fixed-depth searches. Depths below 1 are raised to 1.
    pub fn depth(mut self, depth: PlyKind) -> Self {
        self.depth = depth.max(1);
        self
    }

    /// Set the evaluation strategy.
    pub fn evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Set whether to deepen iteratively until the deadline, or search once at `depth`.
    pub fn iterative(mut self, iterative: bool) -> Self {
        self.iterative = iterative;
        self
    }

    /// Set the search method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the time left, in milliseconds, at which search stops.
    /// Should be large enough for the engine to unwind and return before time runs out.
    pub fn threshold_ms(mut self, threshold_ms: f64) -> Self {
        self.threshold_ms = threshold_ms;
        self
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine chooses moves for any `GameState`. It holds only its configuration,
/// so every call to `get_move` is independent of the last.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Engine {
    depth: PlyKind,
    evaluator: Evaluator,
    iterative: bool,
    method: Method,
    threshold_ms: f64,
}

impl Engine {
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    pub fn depth(&self) -> PlyKind {
        self.depth
    }

    pub fn evaluator(&self) -> Evaluator {
        self.evaluator
    }

    pub fn iterative(&self) -> bool {
        self.iterative
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    /// Choose a move for the player to move in `game` before time runs out.
    ///
    /// `legal_moves` are the moves available to that player, and `time_left` returns the
    /// milliseconds left for this move; it may be called any number of times.
    ///
    /// Returns `Move::NULL` if there are no legal moves, or if the time left was already
    /// under the threshold before any depth completed. Returns Err if `legal_moves`
    /// disagrees with `game`, or if `game` rejects a move it reported as legal.
    pub fn get_move<G, F>(
        &self,
        game: &G,
        legal_moves: &[Move],
        time_left: F,
    ) -> error::Result<Move>
    where
        G: GameState,
        F: Fn() -> f64,
    {
        self.search(game, legal_moves, time_left)
            .map(|search_result| search_result.best_move)
    }

    /// Same as `get_move`, but returns the full result of the search.
    pub fn search<G, F>(
        &self,
        game: &G,
        legal_moves: &[Move],
        time_left: F,
    ) -> error::Result<SearchResult>
    where
        G: GameState,
        F: Fn() -> f64,
    {
        check_legal_moves(game, legal_moves)?;

        let player = game.active_player();
        if legal_moves.is_empty() {
            let score = self.evaluator.evaluate(game, player);
            return Ok(SearchResult::null(player, score));
        }

        let deadline = Deadline::new(time_left, self.threshold_ms);

        if self.iterative {
            return search::ids(game, self.method, &self.evaluator, &deadline);
        }

        match self.method.search(game, self.depth, &self.evaluator, &deadline) {
            Ok(search_result) => Ok(search_result),
            Err(error) if error.is_deadline() => {
                info!("{} depth {} did not complete in time", self.method, self.depth);
                let mut search_result = SearchResult::null(player, f64::NAN);
                search_result.stopped = true;
                Ok(search_result)
            }
            Err(error) => Err(error),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns Err if `legal_moves` is not the same set of moves `game` reports for its active player.
/// Order does not matter, but each move must appear exactly once.
fn check_legal_moves<G: GameState>(game: &G, legal_moves: &[Move]) -> error::Result<()> {
    let expected = game.active_moves();
    let consistent = expected.len() == legal_moves.len()
        && legal_moves.iter().all(|move_| expected.contains(move_))
        && expected.iter().all(|move_| legal_moves.contains(move_));

    if consistent {
        Ok(())
    } else {
        warn!(
            "given {} legal moves, position has {}",
            legal_moves.len(),
            expected.len()
        );
        Err((
            ErrorKind::InconsistentLegalMoves,
            format!("{legal_moves:?} against {:?}", expected.as_slice()),
        )
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isolation::Board;
    use crate::timeman::unlimited;

    #[test]
    fn builder_defaults_and_setters() {
        let engine = Engine::default();
        assert_eq!(engine.depth(), 3);
        assert_eq!(engine.evaluator(), Evaluator::WeightedMobility);
        assert!(engine.iterative());
        assert_eq!(engine.method(), Method::Minimax);
        assert_eq!(engine.threshold_ms(), DEFAULT_THRESHOLD_MS);

        let engine = EngineBuilder::new()
            .depth(0)
            .evaluator(Evaluator::CenterProximity)
            .iterative(false)
            .method(Method::AlphaBeta)
            .threshold_ms(25.0)
            .build();
        assert_eq!(engine.depth(), 1);
        assert_eq!(engine.evaluator(), Evaluator::CenterProximity);
        assert!(!engine.iterative());
        assert_eq!(engine.method(), Method::AlphaBeta);
        assert_eq!(engine.threshold_ms(), 25.0);
    }

    #[test]
    fn fixed_depth_returns_legal_move() {
        let board = Board::default().forecast(Move::new(3, 3)).unwrap();
        let legal_moves = board.active_moves();
        let engine = EngineBuilder::new()
            .iterative(false)
            .depth(1)
            .method(Method::AlphaBeta)
            .build();

        let move_ = engine.get_move(&board, &legal_moves, unlimited()).unwrap();
        assert!(legal_moves.contains(&move_));
    }

    #[test]
    fn fixed_depth_timeout_returns_null() {
        let board = Board::default();
        let legal_moves = board.active_moves();
        let engine = EngineBuilder::new().iterative(false).build();

        let result = engine.search(&board, &legal_moves, || 0.0).unwrap();
        assert!(result.best_move.is_null());
        assert!(result.stopped);
    }

    #[test]
    fn inconsistent_legal_moves_rejected() {
        let board = Board::default();
        let engine = Engine::new();

        let error = engine
            .get_move(&board, &[Move::new(0, 0)], unlimited())
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InconsistentLegalMoves);

        let mut reordered = board.active_moves();
        reordered.reverse();
        assert!(check_legal_moves(&board, &reordered).is_ok());
    }

    #[test]
    fn duplicated_legal_move_rejected() {
        let board = Board::new(3, 3).unwrap().forecast(Move::new(0, 0)).unwrap();
        let mut legal_moves = board.active_moves();
        assert_eq!(legal_moves.len(), 8);

        // Same length, but (2, 2) is replaced by a second (0, 1).
        let last = legal_moves.len() - 1;
        assert_eq!(legal_moves[last], Move::new(2, 2));
        legal_moves[last] = Move::new(0, 1);

        let error = Engine::new()
            .get_move(&board, &legal_moves, || 1_000.0)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InconsistentLegalMoves);
    }
}
