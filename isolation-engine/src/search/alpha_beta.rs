//! Minimax with Alpha-Beta pruning implementation.

use std::time::Instant;

use log::trace;

use crate::coretypes::PlyKind;
use crate::error;
use crate::evaluation::Evaluate;
use crate::game::GameState;
use crate::search::{Context, Counters, Role, Scored, SearchResult, Window};
use crate::timeman::Deadline;

/// Base alpha_beta call. The player to move in `game` is the maxing player,
/// and every position is evaluated from their point of view.
/// It returns the best move and score for the position in the search tree.
///
/// The score always equals what `minimax` returns for the same position and depth.
/// Returns Err(DeadlineExceeded) if the deadline expires before the search completes.
pub fn alpha_beta<G, E, F>(
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
    let scored = alpha_beta_root(game, ply, evaluator, deadline, &mut counters)?;

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

/// Properties of Alpha-Beta pruning.
/// * The maxing player can only update alpha from its children.
/// * The minning player can only update beta from its children.
/// * Alpha and Beta can only be inherited from their ancestors,
///   and are otherwise Alpha=-Inf, Beta=Inf.
/// * Alpha is usually less than Beta. When they are equal or cross, a cut off occurs.
///
/// The root only updates alpha, so beta stays infinite and the root stops early
/// only once it has found a won line.
pub(crate) fn alpha_beta_root<G, E, F>(
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
    let scored = context.alpha_beta_impl(game, ply, Role::Max, Window::FULL, counters)?;
    trace!(
        "alpha_beta ply {ply}: {} nodes, {} cutoffs",
        counters.nodes,
        counters.cutoffs
    );
    Ok(scored)
}

impl<'a, E, F: Fn() -> f64> Context<'a, E, F> {
    /// Returns the score of `game` within `window` and the child move that achieves it.
    /// If a cutoff occurs the score is only a bound, which the parent will not choose.
    fn alpha_beta_impl<G>(
        &self,
        game: &G,
        ply: PlyKind,
        role: Role,
        window: Window,
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

        let num_moves = legal_moves.len();
        let mut best = Scored::start(role);
        let mut window = window;

        for (searched, legal_move) in legal_moves.into_iter().enumerate() {
            let child = game.forecast(legal_move)?;
            let child_score = self
                .alpha_beta_impl(&child, ply - 1, role.flip(), window, counters)?
                .score;
            best = best.fold(role, legal_move, child_score);
            window = window.narrow(role, best.score);

            // No remaining sibling can change the parent's choice.
            if window.is_closed() {
                if searched + 1 < num_moves {
                    counters.cutoffs += 1;
                }
                break;
            }
        }

        Ok(best)
    }
}
