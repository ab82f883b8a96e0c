use std::fmt::{Display, Formatter};

/// A coordinate on a grid. Signed, so that positions just outside the grid
/// can be represented and rejected instead of wrapping around.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Ord, PartialOrd, Hash)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub fn new(row: i32, column: i32) -> Self {
        Position { row, column }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Position::new(row as i32, column as i32)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Position::new(row, column)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
