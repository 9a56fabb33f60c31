//! # nim-console
//!
//! Two-player Nim played at a terminal. Players take turns removing stones
//! from one pile at a time; whoever takes the last stone on the board wins.
//!
//! ## Design Principles
//!
//! 1. **Validated moves**: a move is checked against the board before it is
//!    applied, so a pile can never go negative.
//!
//! 2. **Injected I/O**: every prompt and every line of output goes through a
//!    [`Console`], so whole matches run under test with a scripted session.
//!
//! 3. **Seeded boards**: boards are dealt from an explicit [`GameRng`]; the
//!    same seed always deals the same piles.
//!
//! ## Modules
//!
//! - `core`: piles, moves, players, roster, RNG, configuration
//! - `rules`: the referee (registration, board rendering, win check)
//! - `game`: the match loop
//! - `console`: the console port and its terminal/scripted implementations
//! - `error`: error types

pub mod console;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameRng,
    MatchConfig,
    Move, MoveRecord, PileSet,
    Player, PlayerId, Roster,
};

pub use crate::console::{Console, ScriptedConsole, Terminal};

pub use crate::error::{ConfigError, GameError, MoveError, Result};

pub use crate::game::{Match, MatchOutcome, MatchState};

pub use crate::rules::Referee;
