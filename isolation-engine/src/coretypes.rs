//! The fundamental and simple types of `isolation_engine`.

use std::fmt::{self, Display};
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////

// The most cells a board may have. Every cell fits in one bit of a u64.
pub const MAX_CELLS: usize = 64;

// The max possible number of moves for any position, reached when a player
// may be placed on any cell of an empty board.
pub const MAX_MOVES: usize = MAX_CELLS;

// Number of players in a game.
pub const NUM_PLAYERS: usize = 2;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Type alias for search depth in plies.
pub type PlyKind = u32;

/// Ordered list of moves produced by a position.
/// The order is significant, as search breaks ties by the first move listed.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// Player identifies one of the two competitors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    One,
    Two,
}

/// A move is the board coordinate a player moves to.
/// `Move::NULL` at (-1, -1) stands for "no legal move available".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

////////////////////////////////
// Implementations and Traits //
////////////////////////////////

impl Player {
    /// Returns the other player.
    pub const fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns a contiguous index for this player, usable in arrays of size NUM_PLAYERS.
    pub const fn idx(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl FromStr for Player {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "one" => Ok(Player::One),
            "2" | "two" => Ok(Player::Two),
            _ => Err((ErrorKind::ParsePlayerMalformed, s).into()),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

impl Move {
    /// The "no legal move" sentinel.
    pub const NULL: Move = Move::new(-1, -1);

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns true if this is the "no legal move" sentinel.
    pub const fn is_null(&self) -> bool {
        self.row == Self::NULL.row && self.col == Self::NULL.col
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Move> for (i32, i32) {
    fn from(move_: Move) -> Self {
        (move_.row, move_.col)
    }
}

/// Parses moves written as "2 3", "2,3" or "(2, 3)".
impl FromStr for Move {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut coords = inner
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|part| !part.is_empty());

        let mut next_coord = || -> error::Result<i32> {
            let part = coords
                .next()
                .ok_or((ErrorKind::ParseMoveMalformed, "expected two coordinates"))?;
            part.parse()
                .map_err(|error| error::Error::new(ErrorKind::ParseMoveMalformed, error))
        };
        let row = next_coord()?;
        let col = next_coord()?;

        match coords.next() {
            None => Ok(Move::new(row, col)),
            Some(extra) => Err((ErrorKind::ParseMoveMalformed, extra).into()),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
