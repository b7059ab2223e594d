//! Minimax implementation.

use std::time::Instant;

use crate::coretypes::PlyKind;
use crate::error;
use crate::evaluation::Evaluate;
use crate::game::GameState;
use crate::search::{Context, Counters, Role, Scored, SearchResult};
use crate::timeman::Deadline;

/// Base minimax call. The player to move in `game` is the maxing player,
/// and every position is evaluated from their point of view.
/// It returns the best move and score for the position in the search tree.
///
/// Returns Err(DeadlineExceeded) if the deadline expires before the search completes.
pub fn minimax<G, E, F>(
    game: &G,
    ply: PlyKind,
    evaluator: &E,
    deadline: &Deadline<F>,
) -> error::Result<SearchResult>
where
    G: GameState,
    E: Evaluate<G>,
    F: Fn() -> f64,
{
    let instant = Instant::now();
    let mut counters = Counters::default();
    let scored = minimax_root(game, ply, evaluator, deadline, &mut counters)?;

    Ok(SearchResult {
        best_move: scored.best_move,
        score: scored.score,
        player: game.active_player(),
        depth: ply,
        nodes: counters.nodes,
        cutoffs: counters.cutoffs,
        elapsed: instant.elapsed(),
        stopped: false,
        exhausted: !counters.horizon,
    })
}

pub(crate) fn minimax_root<G, E, F>(
    game: &G,
    ply: PlyKind,
    evaluator: &E,
    deadline: &Deadline<F>,
    counters: &mut Counters,
) -> error::Result<Scored>
where
    G: GameState,
    E: Evaluate<G>,
    F: Fn() -> f64,
{
    let context = Context::new(game, evaluator, deadline);
    context.minimax_impl(game, ply, Role::Max, counters)
}

impl<'a, E, F: Fn() -> f64> Context<'a, E, F> {
    /// Returns the minimax score of `game` and the child move that achieves it.
    /// Leaves return `Move::NULL`, as they have no child move.
    fn minimax_impl<G>(
        &self,
        game: &G,
        ply: PlyKind,
        role: Role,
        counters: &mut Counters,
    ) -> error::Result<Scored>
    where
        G: GameState,
        E: Evaluate<G>,
    {
        self.deadline.check()?;
        counters.nodes += 1;

        let legal_moves = game.active_moves();

        // Stop at terminal node: no legal moves or last depth.
        if legal_moves.is_empty() {
            return Ok(Scored::leaf(self.evaluator.evaluate(game, self.root_player)));
        }
        if ply == 0 {
            counters.horizon = true;
            return Ok(Scored::leaf(self.evaluator.evaluate(game, self.root_player)));
        }

        let mut best = Scored::start(role);

        for legal_move in legal_moves {
            let child = game.forecast(legal_move)?;
            let child_score = self
                .minimax_impl(&child, ply - 1, role.flip(), counters)?
                .score;
            best = best.fold(role, legal_move, child_score);
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::{Move, Player};
    use crate::evaluation::Evaluator;
    use crate::isolation::Board;
    use crate::timeman::{unlimited, Deadline, DEFAULT_THRESHOLD_MS};

    fn board_after(width: u32, height: u32, moves: &[(i32, i32)]) -> Board {
        let mut board = Board::new(width, height).unwrap();
        for &move_ in moves {
            board.apply_move(move_.into()).unwrap();
        }
        board
    }

    #[test]
    fn depth_zero_is_static_evaluation() {
        let deadline = Deadline::new(unlimited(), DEFAULT_THRESHOLD_MS);
        let board = board_after(7, 7, &[(0, 0), (3, 3)]);

        for evaluator in Evaluator::ALL {
            let result = minimax(&board, 0, &evaluator, &deadline).unwrap();
            assert_eq!(result.score, evaluator.evaluate(&board, Player::One));
            assert!(result.best_move.is_null());
            assert_eq!(result.nodes, 1);
            assert!(!result.exhausted);
        }
    }

    #[test]
    fn terminal_root_returns_null_move() {
        let deadline = Deadline::new(unlimited(), DEFAULT_THRESHOLD_MS);
        let board = board_after(3, 3, &[(1, 1), (0, 0)]);

        let result = minimax(&board, 3, &Evaluator::default(), &deadline).unwrap();
        assert!(result.best_move.is_null());
        assert_eq!(result.score, f64::NEG_INFINITY);
        assert!(result.exhausted);
    }

    #[test]
    fn finds_only_move() {
        let deadline = Deadline::new(unlimited(), DEFAULT_THRESHOLD_MS);
        // Player one in the corner with (2, 1) taken has the single move (1, 2).
        let board = board_after(7, 7, &[(0, 0), (2, 1)]);
        assert_eq!(board.active_moves().as_slice(), &[Move::new(1, 2)]);

        for ply in 1..=3 {
            let result = minimax(&board, ply, &Evaluator::default(), &deadline).unwrap();
            assert_eq!(result.best_move, Move::new(1, 2));
        }
    }

    #[test]
    fn expired_deadline_aborts() {
        let deadline = Deadline::new(|| 0.0, DEFAULT_THRESHOLD_MS);
        let board = Board::default();
        let error = minimax(&board, 2, &Evaluator::default(), &deadline).unwrap_err();
        assert!(error.is_deadline());
    }
}
