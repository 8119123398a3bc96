//! Random starting boards ("soups").

use life_core::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::LoadError;

/// A `rows × cols` matrix where each cell is alive with probability
/// `density`. Out-of-range densities are clamped to `[0, 1]`; NaN counts as
/// zero.
pub fn random_cells<R: Rng>(
    rows: usize,
    cols: usize,
    density: f64,
    rng: &mut R,
) -> Vec<Vec<bool>> {
    let p = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_bool(p)).collect())
        .collect()
}

/// A random grid, reproducible from `seed`.
pub fn random_grid(rows: usize, cols: usize, density: f64, seed: u64) -> Result<Grid, LoadError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let cells = random_cells(rows, cols, density, &mut rng);
    log::debug!("soup: {rows}x{cols} at density {density} from seed {seed}");
    Ok(Grid::new(rows, cols, cells)?)
}
