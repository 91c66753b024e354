//! Configuration for grid parsing and generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::GridError;
use crate::grid::Grid;

/// Characters used to read and render grids
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridFormat {
    /// Passable cell
    pub open: char,
    /// Impassable cell
    pub blocked: char,
}

impl Default for GridFormat {
    fn default() -> Self {
        Self {
            open: '.',
            blocked: 'x',
        }
    }
}

/// Random grid generation settings
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Side length of the square grid
    pub size: usize,

    /// Probability that any single cell is blocked
    pub blocked_ratio: f64,

    /// Seed for reproducible grids (None = thread rng)
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 60,
            blocked_ratio: 0.25,
            seed: None,
        }
    }
}

impl GeneratorConfig {

    /// Check the settings before generating
    pub fn validate(&self) -> Result<(), GridError> {
        if self.size == 0 {
            return Err(GridError::invalid_config("size must be positive"));
        }
        Grid::cell_count(self.size)?;
        if !(0.0..=1.0).contains(&self.blocked_ratio) {
            return Err(GridError::invalid_config(format!(
                "blocked_ratio must be within [0, 1], got {}",
                self.blocked_ratio
            )));
        }
        Ok(())
    }
}
