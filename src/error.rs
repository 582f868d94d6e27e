//! Error types for the arbiter crate

use thiserror::Error;

/// Main error type for the arbiter crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action: cell ({row}, {col}) is outside the 3x3 board")]
    ActionOutOfBounds { row: usize, col: usize },

    #[error("invalid action: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("utility is undefined for a non-terminal board")]
    NotTerminal,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("link graph contains no pages")]
    EmptyGraph,

    #[error("damping factor {value} is outside [0, 1]")]
    InvalidDamping { value: f64 },

    #[error("sample count {samples} is below the minimum of 1")]
    InvalidSampleCount { samples: usize },

    #[error("page '{page}' is not part of the link graph")]
    UnknownPage { page: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
