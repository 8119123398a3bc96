//! Construction errors for [`Grid`](crate::Grid).

use std::fmt;

/// Errors raised when building a grid from caller-supplied data.
///
/// Only construction can fail; once a grid exists every lookup and every
/// generation advance is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// `rows` or `cols` was zero.
    EmptyGrid { rows: usize, cols: usize },
    /// The supplied matrix does not have the declared `rows × cols` shape.
    InvalidDimensions {
        rows: usize,
        cols: usize,
        mismatch: Mismatch,
    },
}

/// Which part of the matrix disagreed with the declared shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// The matrix has this many rows.
    RowCount(usize),
    /// Row `row` has `len` cells.
    RowLength { row: usize, len: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid: empty grid ({rows}x{cols}), both dimensions must be positive")
            }
            Self::InvalidDimensions {
                rows,
                cols,
                mismatch: Mismatch::RowCount(n),
            } => write!(f, "grid: expected {rows}x{cols} cells but got {n} rows"),
            Self::InvalidDimensions {
                rows,
                cols,
                mismatch: Mismatch::RowLength { row, len },
            } => write!(
                f,
                "grid: expected {rows}x{cols} cells but row {row} has {len} columns"
            ),
        }
    }
}

impl std::error::Error for GridError {}
