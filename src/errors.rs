//! Error types for grid construction and path planning.

use thiserror::Error;

use crate::grid::Cell;

/// Result type alias for path planning operations.
pub type PlanResult<T> = Result<T, PathPlannerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathPlannerError {
    /// Start and end are not connected through open cells
    #[error("no path found")]
    NoPathFound,

    #[error("cell {cell} is outside a grid of size {size}")]
    OutOfBounds { cell: Cell, size: usize },

    /// Start or end sits on a blocked cell
    #[error("cell {0} is blocked")]
    BlockedCell(Cell),

    /// Parent chain in the route map does not lead back to the start
    #[error("route map is broken at node index {index}")]
    BrokenRoute { index: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors raised while building a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Grid has no rows
    #[error("grid is empty")]
    Empty,

    /// A row's length differs from the number of rows
    #[error("grid is not square: expected {size} columns per row, found {found}")]
    NotSquare { size: usize, found: usize },

    #[error("expected {expected} markers for the grid, found {found}")]
    MarkerCount { expected: usize, found: usize },

    /// size * size does not fit in usize
    #[error("grid of size {0} is too large")]
    TooLarge(usize),

    #[error("unknown marker {found:?} at row {row}, column {col}")]
    UnknownMarker { row: usize, col: usize, found: char },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PathPlannerError {
    /// Create an out of bounds error.
    #[must_use]
    pub const fn out_of_bounds(cell: Cell, size: usize) -> Self {
        Self::OutOfBounds { cell, size }
    }
}

impl GridError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig(details.into())
    }
}
