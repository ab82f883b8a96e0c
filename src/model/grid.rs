use crate::error::{LifeError, Result};
use crate::model::cell::Cell;
use crate::model::position::Position;
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

/// A rectangular matrix, stored row by row.
///
/// Every row holds exactly `columns` values, and the dimensions are fixed once
/// the grid is built. The column count is kept separately so that a grid with
/// zero rows still remembers how wide it is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid<T> {
    columns: usize,
    rows: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    pub fn new(rows: usize, columns: usize, default: T) -> Self
    where
        T: Clone,
    {
        Grid {
            columns,
            rows: vec![vec![default; columns]; rows],
        }
    }

    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(Position) -> T) -> Self {
        let rows = (0..rows)
            .map(|row| {
                (0..columns)
                    .map(|column| f(Position::from((row, column))))
                    .collect()
            })
            .collect();
        Grid { columns, rows }
    }

    /// Builds a grid from raw rows, rejecting rows of unequal length
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let columns = rows.first().map(|row| row.len()).unwrap_or(0);
        if let Some((index, row)) = rows.iter().find_position(|row| row.len() != columns) {
            return Err(LifeError::NotRectangular {
                row: index,
                expected: columns,
                found: row.len(),
            });
        }
        Ok(Grid { columns, rows })
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.columns() == 0
    }

    /// Return true iff the position is within the bounds of the grid
    pub fn contains(&self, position: &Position) -> bool {
        position.row >= 0
            && position.row < self.rows() as i32
            && position.column >= 0
            && position.column < self.columns() as i32
    }

    pub fn get_mut(&mut self, position: &Position) -> Option<&mut T> {
        if self.contains(position) {
            Some(&mut self[position])
        } else {
            None
        }
    }

    /// Like [`Grid::get_mut`], but reports out-of-range positions as an error
    pub fn try_get_mut(&mut self, position: &Position) -> Result<&mut T> {
        let (rows, columns) = (self.rows(), self.columns());
        self.get_mut(position).ok_or(LifeError::OutOfBounds {
            position: *position,
            rows,
            columns,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, value)| (Position::from((r, c)), value))
        })
    }

    /// Builds a new grid of the same shape, leaving this one untouched
    pub fn map<U>(&self, mut f: impl FnMut(Position, &T) -> U) -> Grid<U> {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, value)| f(Position::from((r, c)), value))
                    .collect()
            })
            .collect();
        Grid {
            columns: self.columns,
            rows,
        }
    }
}

impl Grid<Cell> {
    /// Parses a grid with one line per row, `▉` or `#` for alive cells and
    /// `·` or `.` for dead ones. Blank lines and surrounding whitespace are ignored.
    pub fn from_string(string: &str) -> Result<Self> {
        let rows = string
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(line, text)| {
                text.chars()
                    .enumerate()
                    .map(|(column, symbol)| {
                        Cell::from_symbol(symbol).ok_or(LifeError::UnknownSymbol {
                            line,
                            column,
                            symbol,
                        })
                    })
                    .collect::<Result<Vec<Cell>>>()
            })
            .collect::<Result<Vec<Vec<Cell>>>>()?;
        Grid::from_rows(rows)
    }

    pub fn population(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.is_alive()).count()
    }

    pub fn to_bools(&self) -> Vec<Vec<bool>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::is_alive).collect())
            .collect()
    }
}

impl Display for Grid<Cell> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = self
            .rows
            .iter()
            .map(|row| row.iter().map(Cell::symbol).collect::<String>())
            .join("\n");
        f.write_str(&text)
    }
}

impl<T> Index<&Position> for Grid<T> {
    type Output = T;
    fn index(&self, index: &Position) -> &Self::Output {
        &self.rows[index.row as usize][index.column as usize]
    }
}

impl<T> IndexMut<&Position> for Grid<T> {
    fn index_mut(&mut self, index: &Position) -> &mut Self::Output {
        &mut self.rows[index.row as usize][index.column as usize]
    }
}
