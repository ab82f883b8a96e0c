/// The state of a single grid position.
///
/// Cells carry no identity of their own; they are addressed by position, and
/// any key a renderer needs comes from [`crate::model::store::GridStore::cell_key`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Cell {
    pub alive: bool,
}

impl Cell {
    pub const ALIVE: Cell = Cell { alive: true };
    pub const DEAD: Cell = Cell { alive: false };

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn toggled(self) -> Cell {
        Cell { alive: !self.alive }
    }

    pub fn symbol(&self) -> char {
        if self.alive {
            '▉'
        } else {
            '·'
        }
    }

    /// Parses one character of a text pattern, see [`Cell::symbol`]
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '▉' | '#' => Some(Cell::ALIVE),
            '·' | '.' => Some(Cell::DEAD),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Cell { alive }
    }
}
