//! Iterative Deepening Search.

use std::time::Instant;

use log::{debug, info};

use crate::error;
use crate::evaluation::Evaluate;
use crate::game::GameState;
use crate::search::{Counters, Method, SearchResult};
use crate::timeman::Deadline;

/// Searches the game tree with `method` at depth 1, 2, 3, ... until the deadline
/// expires or a depth reaches only finished games.
/// It returns the result of the deepest search that completed.
///
/// A deadline interrupt is recovered here and never returned: the result is flagged
/// `stopped`, and names `Move::NULL` only if not even depth 1 completed.
/// Any other error from the position is returned to the caller.
pub fn ids<G, E, F>(
    game: &G,
    method: Method,
    evaluator: &E,
    deadline: &Deadline<F>,
) -> error::Result<SearchResult>
where
    G: GameState,
    E: Evaluate<G>,
    F: Fn() -> f64,
{
    let instant = Instant::now();
    let player = game.active_player();

    // Nothing to search, the game is over for the root player.
    if game.active_moves().is_empty() {
        let mut search_result = SearchResult::null(player, evaluator.evaluate(game, player));
        search_result.exhausted = true;
        search_result.elapsed = instant.elapsed();
        return Ok(search_result);
    }

    // Invalid default values, overwritten after each completed depth.
    let mut search_result = SearchResult::null(player, f64::NAN);
    let mut total = Counters::default();

    for ply in 1.. {
        let mut counters = Counters::default();
        let outcome = method.search_root(game, ply, evaluator, deadline, &mut counters);
        total.nodes += counters.nodes;
        total.cutoffs += counters.cutoffs;

        match outcome {
            Ok(scored) => {
                search_result.best_move = scored.best_move;
                search_result.score = scored.score;
                search_result.depth = ply;
                search_result.exhausted = !counters.horizon;
                debug!(
                    "{method} depth {ply} complete: move {} score {} nodes {}",
                    scored.best_move, scored.score, counters.nodes
                );

                if search_result.exhausted {
                    debug!("{method} depth {ply} reached the end of every line");
                    break;
                }
            }
            Err(error) if error.is_deadline() => {
                info!(
                    "{method} stopped during depth {ply}, keeping depth {} move {}",
                    search_result.depth, search_result.best_move
                );
                search_result.stopped = true;
                break;
            }
            Err(error) => return Err(error),
        }
    }

    search_result.add_counters(&total);
    search_result.elapsed = instant.elapsed();
    Ok(search_result)
}
