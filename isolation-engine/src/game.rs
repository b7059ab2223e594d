//! The capabilities search requires from a game position.

use crate::coretypes::{Move, MoveList, Player};
use crate::error;

/// A position of a two-player, zero-sum, perfect-information game.
///
/// Positions are immutable from the point of view of search: `forecast` returns a
/// new position and never changes the receiver. Search creates one position per
/// explored node and drops it once the node's subtree has been searched.
pub trait GameState: Sized {
    /// The player whose turn it is.
    fn active_player(&self) -> Player;

    /// All legal moves for `player`, in a fixed order.
    /// An empty list means the player cannot move.
    fn legal_moves(&self, player: Player) -> MoveList;

    /// Returns the position resulting from the active player making `move_`.
    /// Errors if the move is not legal for this position.
    fn forecast(&self, move_: Move) -> error::Result<Self>;

    /// Returns true if `player` has won the game in this position.
    fn is_winner(&self, player: Player) -> bool;

    /// Returns true if `player` has lost the game in this position.
    fn is_loser(&self, player: Player) -> bool;

    /// Returns the opponent of `player`.
    fn opponent(&self, player: Player) -> Player {
        player.opponent()
    }

    /// Returns the board coordinate `player` occupies, if they have been placed.
    fn location(&self, player: Player) -> Option<Move>;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Legal moves of the active player.
    fn active_moves(&self) -> MoveList {
        self.legal_moves(self.active_player())
    }
}
