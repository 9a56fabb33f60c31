//! The turn cycle: show the board, let the current player move, check for a
//! winner, pass the turn.

use serde::Serialize;

use crate::console::Console;
use crate::core::{MatchConfig, MoveRecord, PileSet, Player, PlayerId, MIN_PLAYERS};
use crate::error::{GameError, Result};
use crate::rules::Referee;

/// Where a match is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MatchState {
    /// Turns are still being played.
    Running,
    /// The board is empty and `winner` took the last stone.
    Finished { winner: PlayerId },
    /// Play stopped on an error; the board may be partly played.
    Aborted,
}

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    /// The player who emptied the last pile.
    pub winner: Player,

    /// Number of moves played.
    pub turns: u32,

    /// Every move in the order it was played.
    pub history: Vec<MoveRecord>,

    /// Seed the board was dealt from, if it was dealt.
    pub seed: Option<u64>,
}

/// One match of Nim from registration to the winning move.
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    board: PileSet,
    referee: Referee,
    seed: Option<u64>,
    state: MatchState,
}

impl Match {
    /// Validate `config` and deal a fresh board.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = config.rng();
        let board = PileSet::deal(&mut rng);

        Ok(Self {
            config,
            board,
            referee: Referee::new(),
            seed: Some(rng.seed()),
            state: MatchState::Running,
        })
    }

    /// Start from a prepared board instead of dealing one.
    pub fn with_piles(config: MatchConfig, board: PileSet) -> Result<Self> {
        config.validate()?;
        if board.is_terminal() {
            return Err(GameError::EmptyBoard);
        }

        Ok(Self {
            config,
            board,
            referee: Referee::new(),
            seed: None,
            state: MatchState::Running,
        })
    }

    #[must_use]
    pub fn board(&self) -> &PileSet {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Register players and play turns until the board is empty.
    ///
    /// The winner is announced right after the emptying move; the loop itself
    /// stops on its next check of the board.
    ///
    /// A match plays once. Any error aborts it, and later calls fail with
    /// [`GameError::MatchAborted`].
    pub fn play(&mut self, console: &mut dyn Console) -> Result<MatchOutcome> {
        match self.state {
            MatchState::Running => {}
            MatchState::Finished { .. } => return Err(GameError::MatchFinished),
            MatchState::Aborted => return Err(GameError::MatchAborted),
        }

        let result = self.run(console);
        if let Err(err) = &result {
            tracing::warn!(%err, board = %self.board, "match aborted");
            self.state = MatchState::Aborted;
        }
        result
    }

    fn run(&mut self, console: &mut dyn Console) -> Result<MatchOutcome> {
        let mut roster = self
            .referee
            .register_players(console, self.config.player_count)?;
        if roster.len() < MIN_PLAYERS {
            return Err(GameError::EmptyRoster);
        }
        tracing::info!(players = roster.len(), board = %self.board, seed = ?self.seed, "match started");

        let mut history = Vec::new();
        let mut winner = None;

        while !self.board.is_terminal() {
            self.referee.display(console, &self.board)?;

            let player = roster.current();
            let mv = player.acquire_move(console, &mut self.board)?;
            history.push(MoveRecord::new(
                history.len() as u32 + 1,
                player.id(),
                mv,
                self.board.clone(),
            ));

            if let Some(id) = self.referee.check_win(console, &self.board, player)? {
                winner = Some(id);
            }
            roster.advance();
        }

        let winner = winner
            .and_then(|id| roster.get(id))
            .cloned()
            .ok_or(GameError::EmptyBoard)?;
        self.state = MatchState::Finished {
            winner: winner.id(),
        };
        tracing::info!(winner = %winner.id(), name = winner.name(), turns = history.len(), "match finished");

        Ok(MatchOutcome {
            winner,
            turns: history.len() as u32,
            history,
            seed: self.seed,
        })
    }
}
