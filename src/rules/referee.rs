//! The referee: registers players, shows the board, and calls the winner.
//!
//! The referee holds no state of its own. Every operation works on the
//! board, roster, or console it is handed.

use crate::console::Console;
use crate::core::{PileSet, Player, PlayerId, Roster, MAX_PLAYERS};
use crate::error::{ConfigError, Result};

/// Line drawn above and below the board.
const SEPARATOR: &str = "--------------------";

/// Glyph drawn for each stone still in a pile.
const STONE: &str = "O ";

/// Stateless match official.
#[derive(Clone, Copy, Debug, Default)]
pub struct Referee;

impl Referee {
    pub fn new() -> Self {
        Self
    }

    /// Ask for `count` names and seat the players in the order given.
    ///
    /// Blank names fall back to the seat label, e.g. `Player 2`. Counts
    /// beyond the number of seats are refused before anyone is asked.
    pub fn register_players(&self, console: &mut dyn Console, count: usize) -> Result<Roster> {
        let seats = u8::try_from(count).map_err(|_| ConfigError::TooManyPlayers {
            got: count,
            max: MAX_PLAYERS,
        })?;
        let mut players = Vec::with_capacity(count);

        for id in PlayerId::all(seats) {
            let answer = console.read_line(&format!("Player {} name: ", id.0))?;
            let name = match answer.trim() {
                "" => id.to_string(),
                name => name.to_string(),
            };
            tracing::debug!(%id, %name, "registered player");
            players.push(Player::new(id, name));
        }

        Roster::new(players)
    }

    /// Board as text: one line per pile with a tally mark per stone.
    ///
    /// ```
    /// use nim_console::core::PileSet;
    /// use nim_console::rules::Referee;
    ///
    /// let text = Referee::new().render(&PileSet::from_piles(&[2, 0]));
    /// assert_eq!(text, "\n--------------------\n1: O O \n2: \n--------------------");
    /// ```
    #[must_use]
    pub fn render(&self, board: &PileSet) -> String {
        let mut text = format!("\n{SEPARATOR}");
        for (i, &stones) in board.snapshot().iter().enumerate() {
            text.push_str(&format!("\n{}: {}", i + 1, STONE.repeat(stones as usize)));
        }
        text.push('\n');
        text.push_str(SEPARATOR);
        text
    }

    /// Print the board.
    pub fn display(&self, console: &mut dyn Console, board: &PileSet) -> Result<()> {
        console.write_line(&self.render(board))
    }

    /// Announce `player` as the winner if the board is empty.
    ///
    /// Returns the winner's seat, or `None` while stones remain. Ending the
    /// match is left to the caller.
    pub fn check_win(
        &self,
        console: &mut dyn Console,
        board: &PileSet,
        player: &Player,
    ) -> Result<Option<PlayerId>> {
        if !board.is_terminal() {
            return Ok(None);
        }

        console.write_line(&format!("\n{} won!", player.name()))?;
        Ok(Some(player.id()))
    }
}
