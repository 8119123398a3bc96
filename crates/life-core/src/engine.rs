//! Generation advance: the B3/S23 rule applied to a whole [`Grid`].
//!
//! The engine is double-buffered. Every neighbour count for generation
//! `t + 1` is taken from generation `t`; results go into a scratch buffer
//! and the buffer replaces the live cells in one swap once the sweep is
//! done. Callers only ever see complete generations.

use crate::cell::Cell;
use crate::grid::Grid;

/// The Life rule for one cell given its live-neighbour count.
///
/// A dead cell with exactly 3 live neighbours is born; a live cell with 2
/// or 3 survives; everything else is dead in the next generation.
#[inline]
pub const fn next_state(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Dead, 3) => Cell::Alive,
        (Cell::Alive, 2 | 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Owns one grid and steps it forward.
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    /// Next-generation buffer. Holds the previous generation's storage
    /// between calls so it can be reused without reallocating.
    scratch: Vec<Cell>,
}

impl Engine {
    /// Wrap an initial grid.
    pub fn new(grid: Grid) -> Self {
        let scratch = Vec::with_capacity(grid.rows() * grid.cols());
        Self { grid, scratch }
    }

    /// The current generation.
    #[inline]
    pub fn current(&self) -> &Grid {
        &self.grid
    }

    /// Compute the next generation and make it current.
    pub fn advance(&mut self) -> &Grid {
        let rows = self.grid.rows();
        let cols = self.grid.cols();

        self.scratch.clear();
        self.scratch.resize(rows * cols, Cell::Dead);

        for y in 0..rows {
            for x in 0..cols {
                let (yi, xi) = (y as i64, x as i64);
                let n = self.grid.neighbor_count(yi, xi);
                let s = self.grid.get(yi, xi);
                self.scratch[y * cols + x] = next_state(s, n);
            }
        }

        // The old generation becomes next call's scratch.
        std::mem::swap(&mut self.grid.cells, &mut self.scratch);
        log::trace!(
            "engine: advanced {rows}x{cols}, population {}",
            self.grid.population()
        );
        &self.grid
    }

    /// Advance `k` generations, one at a time.
    pub fn advance_by(&mut self, k: usize) -> &Grid {
        for _ in 0..k {
            self.advance();
        }
        &self.grid
    }

    /// Release the held grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl From<Grid> for Engine {
    fn from(grid: Grid) -> Self {
        Self::new(grid)
    }
}
