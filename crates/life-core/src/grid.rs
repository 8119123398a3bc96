//! The [`Grid`] type — a toroidal 2D board of [`Cell`]s.
//!
//! Every coordinate is reduced modulo the grid's dimensions before use, so
//! there is no such thing as an out-of-range access: stepping past one edge
//! re-enters from the opposite edge.

use std::fmt;

use crate::cell::Cell;
use crate::error::{GridError, Mismatch};
use crate::geom::Point;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `rows × cols` board stored row-major.
///
/// The storage length is `rows * cols` at all times and both dimensions are
/// positive; the constructors reject anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid", into = "RawGrid")
)]
pub struct Grid {
    rows: usize,
    cols: usize,
    pub(crate) cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from a boolean matrix of exactly `rows × cols` cells.
    ///
    /// Fails with [`GridError::EmptyGrid`] if either dimension is zero and
    /// with [`GridError::InvalidDimensions`] if the matrix shape does not
    /// match.
    pub fn new(rows: usize, cols: usize, initial_cells: Vec<Vec<bool>>) -> Result<Self, GridError> {
        check_dims(rows, cols)?;
        if initial_cells.len() != rows {
            return Err(GridError::InvalidDimensions {
                rows,
                cols,
                mismatch: Mismatch::RowCount(initial_cells.len()),
            });
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in initial_cells.into_iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::InvalidDimensions {
                    rows,
                    cols,
                    mismatch: Mismatch::RowLength {
                        row,
                        len: line.len(),
                    },
                });
            }
            cells.extend(line.into_iter().map(Cell::from));
        }
        log::debug!("grid: built {rows}x{cols}");
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid whose shape is taken from the matrix itself (row count
    /// and first row's length). Validation is the same as [`Grid::new`].
    pub fn from_rows(initial_cells: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let rows = initial_cells.len();
        let cols = initial_cells.first().map_or(0, Vec::len);
        Self::new(rows, cols, initial_cells)
    }

    /// An all-dead grid.
    pub fn dead(rows: usize, cols: usize) -> Result<Self, GridError> {
        check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, y: i64, x: i64) -> usize {
        let p = Point::new(x, y).wrap(self.rows, self.cols);
        p.y as usize * self.cols + p.x as usize
    }

    /// Cell at `(y, x)`, wrapped onto the torus.
    #[inline]
    pub fn get(&self, y: i64, x: i64) -> Cell {
        self.cells[self.index(y, x)]
    }

    /// Whether the cell at `(y, x)` is alive.
    #[inline]
    pub fn is_alive(&self, y: i64, x: i64) -> bool {
        self.get(y, x).is_alive()
    }

    /// Set the cell at `(y, x)`, wrapped onto the torus.
    #[inline]
    pub fn set(&mut self, y: i64, x: i64, cell: Cell) {
        let i = self.index(y, x);
        self.cells[i] = cell;
    }

    /// Number of live cells among the 8 Moore neighbours of `(y, x)`.
    ///
    /// Each offset is wrapped independently and summed, so on a board
    /// narrower than 3 cells the same physical neighbour can be counted more
    /// than once. The result is always in `0..=8`.
    ///
    /// The centre is wrapped before the offsets are applied, so any `i64`
    /// pair is accepted without overflow.
    pub fn neighbor_count(&self, y: i64, x: i64) -> u8 {
        Point::new(x, y)
            .wrap(self.rows, self.cols)
            .neighbors_8()
            .iter()
            .map(|n| self.get(n.y, n.x).count())
            .sum()
    }

    /// Number of live cells on the board.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Whether every cell is dead.
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|c| !c.is_alive())
    }

    /// One row of the board. `y` wraps like any other coordinate.
    pub fn row(&self, y: i64) -> &[Cell] {
        let start = self.index(y, 0);
        &self.cells[start..start + self.cols]
    }

    /// The board as a boolean matrix.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.cols)
            .map(|r| r.iter().map(|c| c.is_alive()).collect())
            .collect()
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter { grid: self, pos: 0 }
    }

    /// The cells of `self` that differ from `prev`.
    ///
    /// When the shapes differ every cell of `self` is reported, so a
    /// renderer can use the result as a full redraw.
    pub fn changes_from(&self, prev: &Grid) -> Vec<(Point, Cell)> {
        if self.rows != prev.rows || self.cols != prev.cols {
            return self.iter().collect();
        }
        self.iter()
            .zip(prev.cells.iter())
            .filter(|((_, curr), old)| curr != *old)
            .map(|(item, _)| item)
            .collect()
    }
}

fn check_dims(rows: usize, cols: usize) -> Result<(), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyGrid { rows, cols });
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    pos: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let cell = *self.grid.cells.get(self.pos)?;
        let p = Point::new(
            (self.pos % self.grid.cols) as i64,
            (self.pos / self.grid.cols) as i64,
        );
        self.pos += 1;
        Some((p, cell))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.cells.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Point, Cell);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// serde representation
// ---------------------------------------------------------------------------

/// Wire shape of a [`Grid`]; deserialising goes back through [`Grid::new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<bool>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        Grid::new(raw.rows, raw.cols, raw.cells)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for RawGrid {
    fn from(g: Grid) -> Self {
        Self {
            rows: g.rows,
            cols: g.cols,
            cells: g.to_rows(),
        }
    }
}
