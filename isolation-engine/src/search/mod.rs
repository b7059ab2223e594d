//! Search functions.

mod alpha_beta;
mod bound;
mod ids;
mod minimax;

pub use alpha_beta::*;
pub use bound::*;
pub use ids::*;
pub use minimax::*;

use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;

use crate::coretypes::{Move, Player, PlyKind};
use crate::error::{self, ErrorKind};
use crate::evaluation::Evaluate;
use crate::game::GameState;
use crate::timeman::Deadline;

/// The results found from running a search on some root position.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The best move to make for a position discovered from search.
    /// `Move::NULL` when the root has no legal moves, or no depth completed in time.
    pub best_move: Move,
    /// Score of making the best move, relative to `player`.
    pub score: f64,
    /// The player to move for the root position that was searched.
    pub player: Player,
    /// Depth in plies of the last fully completed search.
    pub depth: PlyKind,
    /// Total number of nodes visited, including nodes of an interrupted iteration.
    pub nodes: u64,
    /// Number of nodes where alpha-beta skipped at least one sibling.
    pub cutoffs: u64,
    /// Total time elapsed from the start to the end of a search.
    pub elapsed: Duration,
    /// Flag that indicates the search was stopped by its deadline.
    pub stopped: bool,
    /// Flag that indicates every leaf reached was a finished game,
    /// so searching deeper cannot change the result.
    pub exhausted: bool,
}

impl SearchResult {
    /// A result naming no move, for a root that cannot be searched.
    pub fn null(player: Player, score: f64) -> Self {
        Self {
            best_move: Move::NULL,
            score,
            player,
            depth: 0,
            nodes: 0,
            cutoffs: 0,
            elapsed: Duration::ZERO,
            stopped: false,
            exhausted: false,
        }
    }

    /// Add the node and cutoff counts of `counters` to this result.
    pub(crate) fn add_counters(&mut self, counters: &Counters) {
        self.nodes += counters.nodes;
        self.cutoffs += counters.cutoffs;
    }

    /// Get average nodes per second of search. Zero if no time elapsed.
    pub fn nps(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds == 0.0 {
            return 0.0;
        }
        (self.nodes as f64 / seconds).round()
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut displayed = String::new();
        displayed.push_str("SearchResult {\n");
        displayed.push_str(&format!("    best_move: {}\n", self.best_move));
        displayed.push_str(&format!("    score    : {}\n", self.score));
        displayed.push_str(&format!("    player   : {}\n", self.player));
        displayed.push_str(&format!("    depth    : {}\n", self.depth));
        displayed.push_str(&format!("    nodes    : {}\n", self.nodes));
        displayed.push_str(&format!("    cutoffs  : {}\n", self.cutoffs));
        displayed.push_str(&format!("    nps      : {}\n", self.nps()));
        displayed.push_str(&format!(
            "    elapsed  : {}.{:03}s\n",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        ));
        displayed.push_str(&format!("    stopped  : {}\n", self.stopped));
        displayed.push_str(&format!("    exhausted: {}\n", self.exhausted));
        displayed.push_str("}\n");

        write!(f, "{displayed}")
    }
}

/// Counts kept while walking the tree. Passed by reference through recursion so
/// nodes visited before a deadline interrupt are still counted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub(crate) struct Counters {
    pub nodes: u64,
    pub cutoffs: u64,
    /// Set once any node is cut off by depth rather than by the game ending.
    pub horizon: bool,
}

/// State shared read-only by every node of one search.
pub(crate) struct Context<'a, E, F> {
    evaluator: &'a E,
    deadline: &'a Deadline<F>,
    /// Every position is scored for the player to move at the root.
    root_player: Player,
}

impl<'a, E, F> Context<'a, E, F> {
    pub(crate) fn new<G: GameState>(
        root: &G,
        evaluator: &'a E,
        deadline: &'a Deadline<F>,
    ) -> Self {
        Self {
            evaluator,
            deadline,
            root_player: root.active_player(),
        }
    }
}

/// The tree search algorithm run at each depth.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Method {
    #[default]
    Minimax,
    AlphaBeta,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Minimax => "minimax",
            Method::AlphaBeta => "alphabeta",
        }
    }

    /// Search `game` to exactly `ply` depth with this method.
    pub fn search<G, E, F>(
        &self,
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
        match self {
            Method::Minimax => minimax(game, ply, evaluator, deadline),
            Method::AlphaBeta => alpha_beta(game, ply, evaluator, deadline),
        }
    }

    /// Search one depth, adding visited nodes to `counters` even if interrupted.
    pub(crate) fn search_root<G, E, F>(
        &self,
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
        match self {
            Method::Minimax => minimax_root(game, ply, evaluator, deadline, counters),
            Method::AlphaBeta => alpha_beta_root(game, ply, evaluator, deadline, counters),
        }
    }
}

impl FromStr for Method {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Method::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(Method::AlphaBeta),
            _ => Err((ErrorKind::ParseMethodMalformed, s).into()),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_method() {
        assert_eq!("minimax".parse::<Method>().unwrap(), Method::Minimax);
        assert_eq!("AlphaBeta".parse::<Method>().unwrap(), Method::AlphaBeta);
        assert_eq!("alpha-beta".parse::<Method>().unwrap(), Method::AlphaBeta);
        assert_eq!(
            "negamax".parse::<Method>().unwrap_err().kind(),
            ErrorKind::ParseMethodMalformed
        );
    }

    #[test]
    fn null_result() {
        let result = SearchResult::null(Player::One, f64::NEG_INFINITY);
        assert!(result.best_move.is_null());
        assert_eq!(result.depth, 0);
        assert!(result.to_string().contains("(-1, -1)"));
    }

    #[test]
    fn nps_without_elapsed_time() {
        let mut result = SearchResult::null(Player::Two, 0.0);
        assert_eq!(result.nps(), 0.0);
        assert!(result.to_string().contains("nps      : 0\n"));

        result.nodes = 500;
        result.elapsed = Duration::from_millis(250);
        assert_eq!(result.nps(), 2000.0);
    }
}
