//! Core game types: piles, moves, players, RNG, configuration.
//!
//! Nothing here talks to a terminal directly; players read their moves
//! through the [`Console`](crate::console::Console) they are handed.

pub mod config;
pub mod history;
pub mod piles;
pub mod player;
pub mod rng;

pub use config::{MatchConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use history::MoveRecord;
pub use piles::{Move, PileSet, PILE_COUNT, STONES_PER_PILE};
pub use player::{Player, PlayerId, Roster};
pub use rng::GameRng;
