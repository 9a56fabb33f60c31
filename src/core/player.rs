//! Players and the turn order they sit in.
//!
//! ## PlayerId
//!
//! Seat number, 1-based, fixed at registration.
//!
//! ## Roster
//!
//! Registration order is turn order. The roster owns the turn cursor and
//! wraps it around modulo its size.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::piles::{Move, PileSet};
use crate::console::Console;
use crate::error::{GameError, Result};

/// Player seat number. The first registered player is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Position in the roster (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// Every seat for a match with `player_count` players, in turn order.
    ///
    /// ```
    /// use nim_console::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(seats, vec![PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: u8) -> impl Iterator<Item = PlayerId> {
        (1..=player_count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A registered participant. Identity never changes after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ask this player for a move and apply it to `board`.
    ///
    /// Non-numeric answers re-ask the same question; moves the board rejects
    /// are reported and both questions are asked again. Returns the move that
    /// was applied.
    pub fn acquire_move(&self, console: &mut dyn Console, board: &mut PileSet) -> Result<Move> {
        console.write_line(&format!("{}'s turn:", self.name))?;

        loop {
            let pile: usize = prompt_number(console, "What pile to remove from? ")?;
            let stones: u32 = prompt_number(console, "How many stones to remove? ")?;

            match board.check_move(pile, stones).and_then(|mv| board.apply(mv).map(|()| mv)) {
                Ok(mv) => {
                    tracing::debug!(player = %self.id, %mv, %board, "move applied");
                    return Ok(mv);
                }
                Err(err) => {
                    tracing::debug!(player = %self.id, pile, stones, %err, "move rejected");
                    console.write_line(&format!("Invalid move: {err}"))?;
                }
            }
        }
    }
}

/// Read from `console` until the answer parses as a `T`.
fn prompt_number<T: FromStr>(console: &mut dyn Console, prompt: &str) -> Result<T> {
    loop {
        let answer = console.read_line(prompt)?;
        match answer.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => {
                tracing::debug!(%answer, "not a number");
                console.write_line("Please enter a whole number.")?;
            }
        }
    }
}

/// Players in turn order plus the index of whoever moves next.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Roster {
    players: Vec<Player>,
    turn: usize,
}

impl Roster {
    /// Build a roster; the first player moves first.
    pub fn new(players: Vec<Player>) -> Result<Self> {
        if players.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        Ok(Self { players, turn: 0 })
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false: construction rejects empty rosters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Pass the turn to the next player, wrapping around.
    pub fn advance(&mut self) {
        self.turn = (self.turn + 1) % self.players.len();
    }

    /// Look up a player by seat.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}
