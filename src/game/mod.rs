//! Match loop.
//!
//! A [`Match`] deals (or is handed) a board, has the [`Referee`] seat the
//! players, then cycles turns until the last stone is taken:
//!
//! 1. the referee shows the board
//! 2. the current player picks and applies a move
//! 3. the referee announces a winner if the board is now empty
//! 4. the turn passes to the next player
//!
//! [`Referee`]: crate::rules::Referee

mod match_loop;

pub use match_loop::{Match, MatchOutcome, MatchState};
