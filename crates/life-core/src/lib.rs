//! **life-core** — Conway's Game of Life on a toroidal grid.
//!
//! This crate is the simulation engine only: a [`Grid`] of [`Cell`]s whose
//! edges wrap around, and an [`Engine`] that advances it one generation at a
//! time under the B3/S23 rule. Loading patterns and driving the simulation
//! (timing, pausing, rendering) live in the caller.
//!
//! ```
//! use life_core::{Cell, Engine, Grid};
//!
//! let mut grid = Grid::dead(5, 5)?;
//! for x in 1..4 {
//!     grid.set(2, x, Cell::Alive);
//! }
//! let mut engine = Engine::new(grid);
//! let next = engine.advance();
//! assert!(next.is_alive(1, 2) && next.is_alive(3, 2));
//! assert_eq!(next.population(), 3);
//! # Ok::<(), life_core::GridError>(())
//! ```

pub mod cell;
pub mod engine;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use engine::{Engine, next_state};
pub use error::{GridError, Mismatch};
pub use geom::{MOORE, Point};
pub use grid::{Grid, GridIter};
