//! Error types for moves, configuration, and match execution.

/// Reasons a move is rejected by a [`PileSet`](crate::core::PileSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("pile {pile} does not exist (choose 1-{piles})")]
    PileOutOfRange { pile: usize, piles: usize },

    #[error("pile {pile} only has {available} stones left, cannot remove {requested}")]
    NotEnoughStones {
        pile: usize,
        requested: u32,
        available: u32,
    },
}

/// Errors raised while validating a [`MatchConfig`](crate::core::MatchConfig).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("a match needs at least {min} players, got {got}")]
    TooFewPlayers { got: usize, min: usize },

    #[error("at most {max} players are supported, got {got}")]
    TooManyPlayers { got: usize, max: usize },
}

/// Fatal errors that end a match early.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed while waiting for: {prompt}")]
    EndOfInput { prompt: String },

    #[error("roster is empty")]
    EmptyRoster,

    #[error("board has no stones to play")]
    EmptyBoard,

    #[error("match is already finished")]
    MatchFinished,

    #[error("match was abandoned after an earlier error")]
    MatchAborted,

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid move: {0}")]
    Move(#[from] MoveError),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = GameError> = std::result::Result<T, E>;
