//! Seeded random population.
//!
//! Respects the determinism contract: a ChaCha8 generator seeded from
//! the caller's `seed` draws exactly one `f64` per cell in row-major
//! order, so identical `(seed, density, width, height)` always yields
//! an identical grid, on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Clamp a requested density into `[0, 1]`. NaN becomes `0`.
pub fn clamp_density(density: f64) -> f64 {
    if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    }
}

/// Overwrite `cells` with a seeded random pattern.
///
/// Each cell is alive when its uniform sample in `[0, 1)` is below
/// `density`, so `0.0` gives an all-dead and `1.0` an all-alive grid.
/// `density` must already be clamped. Returns the resulting population.
pub fn fill_random(cells: &mut [u8], seed: u64, density: f64) -> usize {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut population = 0;
    for cell in cells.iter_mut() {
        let alive = rng.random::<f64>() < density;
        *cell = u8::from(alive);
        population += usize::from(alive);
    }
    population
}
