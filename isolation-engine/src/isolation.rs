//! Knight-move Isolation board.
//!
//! Two players share a rectangular board of up to 64 cells. On their first turn a
//! player may be placed on any open cell. Every later turn they move like a chess
//! knight to an open cell. Each cell a player occupies stays blocked for the rest
//! of the game. The player to move with no legal moves loses.

use std::fmt::{self, Display};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::bitboard::Bitboard;
use crate::coretypes::{Move, MoveList, Player, MAX_CELLS, NUM_PLAYERS};
use crate::error::{self, ErrorKind};
use crate::game::GameState;

pub const DEFAULT_WIDTH: u32 = 7;
pub const DEFAULT_HEIGHT: u32 = 7;

/// Knight jumps, in the order moves are generated.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Board holds the complete state of an Isolation game.
/// It is small and `Copy`, so forecasting a move is a copy plus an update.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    width: u32,
    height: u32,
    blocked: Bitboard,
    locations: [Option<Move>; NUM_PLAYERS],
    active: Player,
    move_count: u32,
}

impl Board {
    /// Create an empty board with player one to move.
    pub fn new(width: u32, height: u32) -> error::Result<Self> {
        let num_cells = width as usize * height as usize;
        if num_cells == 0 || num_cells > MAX_CELLS {
            return Err((ErrorKind::BoardSize, format!("{width}x{height}")).into());
        }

        Ok(Self {
            width,
            height,
            blocked: Bitboard::EMPTY,
            locations: [None; NUM_PLAYERS],
            active: Player::One,
            move_count: 0,
        })
    }

    /// Number of moves made so far in the game.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns true if `move_` lies on the board.
    pub fn contains(&self, move_: Move) -> bool {
        (0..self.height as i32).contains(&move_.row) && (0..self.width as i32).contains(&move_.col)
    }

    /// Returns true if `move_` lies on the board and has never been occupied.
    pub fn is_open(&self, move_: Move) -> bool {
        self.contains(move_) && !self.blocked.has_cell(self.idx(move_))
    }

    /// All cells that have never been occupied, in row-major order.
    pub fn blank_cells(&self) -> MoveList {
        let all_cells = Bitboard::filled(self.num_cells());
        (all_cells & !self.blocked)
            .map(|idx| self.cell(idx))
            .collect()
    }

    /// Make `move_` for the active player, then pass the turn.
    pub fn apply_move(&mut self, move_: Move) -> error::Result<()> {
        if !self.legal_moves(self.active).contains(&move_) {
            return Err((ErrorKind::IllegalMove, format!("{move_} for {}", self.active)).into());
        }

        self.blocked.set_cell(self.idx(move_));
        self.locations[self.active.idx()] = Some(move_);
        self.active = self.active.opponent();
        self.move_count += 1;
        Ok(())
    }

    /// Returns a position reached by playing up to `plies` uniformly random legal moves.
    /// Stops early if the player to move has no legal moves.
    pub fn play_random<R: Rng + ?Sized>(&self, rng: &mut R, plies: u32) -> error::Result<Self> {
        let mut board = *self;
        for _ in 0..plies {
            let legal_moves = board.active_moves();
            match legal_moves.as_slice().choose(rng) {
                Some(&move_) => board.apply_move(move_)?,
                None => break,
            }
        }
        Ok(board)
    }

    fn num_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn idx(&self, move_: Move) -> usize {
        (move_.row * self.width as i32 + move_.col) as usize
    }

    fn cell(&self, idx: usize) -> Move {
        let idx = idx as i32;
        let width = self.width as i32;
        Move::new(idx / width, idx % width)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            blocked: Bitboard::EMPTY,
            locations: [None; NUM_PLAYERS],
            active: Player::One,
            move_count: 0,
        }
    }
}

impl GameState for Board {
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves(&self, player: Player) -> MoveList {
        match self.locations[player.idx()] {
            None => self.blank_cells(),
            Some(from) => KNIGHT_OFFSETS
                .iter()
                .map(|&(d_row, d_col)| Move::new(from.row + d_row, from.col + d_col))
                .filter(|&to| self.is_open(to))
                .collect(),
        }
    }

    fn forecast(&self, move_: Move) -> error::Result<Self> {
        let mut board = *self;
        board.apply_move(move_)?;
        Ok(board)
    }

    fn is_winner(&self, player: Player) -> bool {
        let opponent = player.opponent();
        self.active == opponent && self.legal_moves(opponent).is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        self.active == player && self.legal_moves(player).is_empty()
    }

    fn location(&self, player: Player) -> Option<Move> {
        self.locations[player.idx()]
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.width {
            write!(f, " {col:<2} ")?;
        }
        writeln!(f)?;

        for row in 0..self.height as i32 {
            write!(f, "{row:>2} ")?;
            for col in 0..self.width as i32 {
                let cell = Move::new(row, col);
                let symbol = if self.locations[Player::One.idx()] == Some(cell) {
                    '1'
                } else if self.locations[Player::Two.idx()] == Some(cell) {
                    '2'
                } else if self.blocked.has_cell(self.idx(cell)) {
                    '-'
                } else {
                    ' '
                };
                write!(f, "| {symbol} ")?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{} to move", self.active)
    }
}
