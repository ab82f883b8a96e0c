use crate::error::Result;
use crate::model::cell::Cell;
use crate::model::engine;
use crate::model::grid::Grid;
use crate::model::position::Position;
use log::{debug, info, trace};
use rand::Rng;

/// A grid where every cell is alive with probability one half, independently
pub fn generate_random(rows: usize, columns: usize, rng: &mut impl Rng) -> Grid<Cell> {
    Grid::from_fn(rows, columns, |_| Cell::from(rng.gen_bool(0.5)))
}

pub fn generate_empty(rows: usize, columns: usize) -> Grid<Cell> {
    Grid::new(rows, columns, Cell::DEAD)
}

/// Returns a copy of the grid with the cell at `position` flipped.
/// Positions outside the grid are an error, never a silent no-op.
pub fn toggle(grid: &Grid<Cell>, position: Position) -> Result<Grid<Cell>> {
    let mut next = grid.clone();
    let cell = next.try_get_mut(&position)?;
    *cell = cell.toggled();
    Ok(next)
}

/// Returns a copy of the grid with the cell at `position` alive.
/// Painting over a cell that is already alive leaves it alive.
pub fn paint(grid: &Grid<Cell>, position: Position) -> Result<Grid<Cell>> {
    let mut next = grid.clone();
    *next.try_get_mut(&position)? = Cell::ALIVE;
    Ok(next)
}

/// Identifies a cell for a renderer. Stable while the grid evolves or is
/// edited, and different for every freshly generated grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CellKey {
    pub epoch: u32,
    pub row: usize,
    pub column: usize,
}

/// Owns the current generation.
///
/// Every change replaces the grid with a new value, so a grid handed out by
/// [`GridStore::grid`] and cloned by a reader never changes underneath it.
#[derive(Clone, Debug)]
pub struct GridStore {
    grid: Grid<Cell>,
    /// Bumped every time a new grid is generated
    epoch: u32,
    /// Steps since the grid was generated
    generation: usize,
}

impl GridStore {
    pub fn new(grid: Grid<Cell>) -> Self {
        GridStore {
            grid,
            epoch: 0,
            generation: 0,
        }
    }

    pub fn empty(rows: usize, columns: usize) -> Self {
        GridStore::new(generate_empty(rows, columns))
    }

    pub fn random(rows: usize, columns: usize, rng: &mut impl Rng) -> Self {
        GridStore::new(generate_random(rows, columns, rng))
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Returns the renderer key of the cell at `position`, if it is on the grid
    pub fn cell_key(&self, position: Position) -> Option<CellKey> {
        self.grid.contains(&position).then(|| CellKey {
            epoch: self.epoch,
            row: position.row as usize,
            column: position.column as usize,
        })
    }

    fn replace_generated(&mut self, grid: Grid<Cell>) {
        self.grid = grid;
        self.epoch = self.epoch.wrapping_add(1);
        self.generation = 0;
    }

    /// Replaces the grid with a random one of the same dimensions
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        self.replace_generated(generate_random(self.rows(), self.columns(), rng));
        info!(
            "Generated random {}x{} grid, population {}",
            self.rows(),
            self.columns(),
            self.population()
        );
    }

    /// Replaces the grid with an empty one of the same dimensions
    pub fn clear(&mut self) {
        self.replace_generated(generate_empty(self.rows(), self.columns()));
        info!("Cleared {}x{} grid", self.rows(), self.columns());
    }

    pub fn toggle(&mut self, position: Position) -> Result<()> {
        self.grid = toggle(&self.grid, position)?;
        trace!("Toggled cell {position}");
        Ok(())
    }

    pub fn paint(&mut self, position: Position) -> Result<()> {
        self.grid = paint(&self.grid, position)?;
        trace!("Painted cell {position}");
        Ok(())
    }

    /// Advances the grid by one generation
    pub fn evolve(&mut self) {
        self.grid = engine::step(&self.grid);
        self.generation += 1;
        debug!(
            "Generation {}, population {}",
            self.generation,
            self.population()
        );
    }
}
