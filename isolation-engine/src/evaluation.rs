//! Evaluation functions that score a position for a player.
//!
//! Scores are relative to the player asked about: greater is better for them.
//! A lost position is `f64::NEG_INFINITY` and a won position is `f64::INFINITY`,
//! every other position scores a finite value with no fixed range.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::coretypes::Player;
use crate::error::{self, ErrorKind};
use crate::game::GameState;

/// A position scoring function used in place of full game resolution.
/// Implementations must be pure: same position and player, same score.
pub trait Evaluate<G> {
    fn evaluate(&self, game: &G, player: Player) -> f64;
}

/// Built in evaluation strategies. One is chosen when an engine is built,
/// and stays fixed for every search that engine runs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Evaluator {
    /// Inverse distance from the player to the center of the board.
    CenterProximity,
    /// Own move count minus twice the opponent's move count.
    MobilityDifference,
    /// Ratio of own moves to opponent moves, weighted toward aggressive play.
    #[default]
    WeightedMobility,
}

// Evaluation Constants

/// Distances to the center are clamped to at least this value, so a player on the
/// exact center scores 2.0 instead of dividing by zero.
/// 0.5 is the closest a cell can be to a center that falls between cells.
const MIN_CENTER_DISTANCE: f64 = 0.5;

/// Opponent mobility weight for `WeightedMobility`.
const OPPONENT_WEIGHT: f64 = 1.25;

impl Evaluator {
    /// All strategies, in declaration order.
    pub const ALL: [Evaluator; 3] = [
        Evaluator::CenterProximity,
        Evaluator::MobilityDifference,
        Evaluator::WeightedMobility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Evaluator::CenterProximity => "center",
            Evaluator::MobilityDifference => "mobility",
            Evaluator::WeightedMobility => "weighted",
        }
    }
}

impl<G: GameState> Evaluate<G> for Evaluator {
    fn evaluate(&self, game: &G, player: Player) -> f64 {
        if game.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if game.is_winner(player) {
            return f64::INFINITY;
        }

        match self {
            Evaluator::CenterProximity => center_proximity(game, player),
            Evaluator::MobilityDifference => mobility_difference(game, player),
            Evaluator::WeightedMobility => weighted_mobility(game, player),
        }
    }
}

// Evaluation Functions

/// Returns the inverse euclidean distance from `player` to the board's center.
/// A player who has not been placed yet scores 0.
pub fn center_proximity<G: GameState>(game: &G, player: Player) -> f64 {
    let location = match game.location(player) {
        Some(location) => location,
        None => return 0.0,
    };
    let center_row = game.height() as f64 / 2.0;
    let center_col = game.width() as f64 / 2.0;

    let d_row = location.row as f64 - center_row;
    let d_col = location.col as f64 - center_col;
    let distance = (d_row * d_row + d_col * d_col).sqrt();

    1.0 / distance.max(MIN_CENTER_DISTANCE)
}

/// Returns `own - 2 * opponent` legal move counts.
pub fn mobility_difference<G: GameState>(game: &G, player: Player) -> f64 {
    let (own_moves, opp_moves) = mobility(game, player);
    own_moves - 2.0 * opp_moves
}

/// Returns `(1 + own) / (1.25 * (1 + opponent))` legal move counts.
/// Always well-defined, as both terms are at least 1.
pub fn weighted_mobility<G: GameState>(game: &G, player: Player) -> f64 {
    let (own_moves, opp_moves) = mobility(game, player);
    (1.0 + own_moves) / (OPPONENT_WEIGHT * (1.0 + opp_moves))
}

/// Legal move counts of `player` and their opponent.
fn mobility<G: GameState>(game: &G, player: Player) -> (f64, f64) {
    let own_moves = game.legal_moves(player).len() as f64;
    let opp_moves = game.legal_moves(game.opponent(player)).len() as f64;
    (own_moves, opp_moves)
}

impl FromStr for Evaluator {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "center-proximity" => Ok(Evaluator::CenterProximity),
            "mobility" | "mobility-difference" => Ok(Evaluator::MobilityDifference),
            "weighted" | "weighted-mobility" => Ok(Evaluator::WeightedMobility),
            _ => Err((ErrorKind::ParseEvaluatorMalformed, s).into()),
        }
    }
}

impl Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
