use crate::model::position::Position;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Debug, Error)]
pub enum LifeError {
    /// A cell edit addressed a position outside the grid
    #[error("position {position} is outside the {rows}x{columns} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        columns: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },

    /// The autoplay ticker could not be scheduled
    #[error("could not schedule autoplay: {0}")]
    Scheduler(String),

    #[error("tick interval of {millis} ms is too long for the timer")]
    IntervalTooLong { millis: u128 },
}

impl From<std::io::Error> for LifeError {
    fn from(error: std::io::Error) -> Self {
        LifeError::Scheduler(error.to_string())
    }
}
