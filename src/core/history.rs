//! Move history for a single match.
//!
//! Each applied move is recorded with who made it, on which turn, and what
//! the board looked like afterwards. History lives only as long as the match
//! outcome that carries it.

use serde::{Deserialize, Serialize};

use super::piles::{Move, PileSet};
use super::player::PlayerId;

/// A move as it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number, starting at 1.
    pub turn: u32,

    /// The player who moved.
    pub player: PlayerId,

    /// The move applied.
    pub mv: Move,

    /// Board after the move.
    pub board: PileSet,
}

impl MoveRecord {
    #[must_use]
    pub fn new(turn: u32, player: PlayerId, mv: Move, board: PileSet) -> Self {
        Self {
            turn,
            player,
            mv,
            board,
        }
    }

    /// True if this move emptied the last pile.
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.board.is_terminal()
    }
}
