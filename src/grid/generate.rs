use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use super::{Grid, Marker};
use crate::config::GeneratorConfig;
use crate::errors::GridError;


/// Random grid where every cell is blocked independently with `blocked_ratio`
/// Seeded configs always produce the same grid
pub fn random_grid(config: &GeneratorConfig) -> Result<Grid, GridError> {
    match config.seed {
        Some(seed) => random_grid_with(config, &mut StdRng::seed_from_u64(seed)),
        None => random_grid_with(config, &mut rand::rng()),
    }
}

/// Random grid drawn from a caller supplied rng
pub fn random_grid_with<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Grid, GridError> {
    config.validate()?;

    let cells = Grid::cell_count(config.size)?;
    let markers: Vec<Marker> = (0..cells)
        .map(|_| {
            if rng.random_bool(config.blocked_ratio) {
                Marker::Blocked
            } else {
                Marker::Open
            }
        })
        .collect();

    debug!(
        size = config.size,
        blocked = markers.iter().filter(|m| **m == Marker::Blocked).count(),
        "Generated random grid"
    );

    Grid::new(config.size, markers)
}
