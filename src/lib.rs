//! Path search over square grids of open and blocked cells.
//!
//! Two strategies share one grid model:
//! - [`TurnMinimizingSearch`] finds the route with the fewest direction changes
//! - [`ShortestPathSearch`] finds the route with the fewest steps
//!
//! ```
//! use navigate_grid::{Cell, Grid, ShortestPathSearch, TurnMinimizingSearch};
//!
//! let grid = Grid::from_rows(&[".x.", "...", ".x."]).unwrap();
//! let (start, end) = (Cell::new(0, 0), Cell::new(0, 2));
//!
//! let shortest = ShortestPathSearch::new(start, end, &grid).unwrap().search();
//! assert_eq!(shortest.found().map(|r| r.path_length), Some(5));
//!
//! let fewest_turns = TurnMinimizingSearch::new(start, end, &grid).unwrap().search();
//! assert_eq!(fewest_turns.found().map(|r| r.turn_count), Some(2));
//! ```

mod collections;
pub mod config;
pub mod errors;
pub mod graph_algos;
pub mod grid;

pub use config::{GeneratorConfig, GridFormat};
pub use errors::{GridError, PathPlannerError, PlanResult};
pub use graph_algos::{
    SearchOutcome, ShortestPathSearch, ShortestRoute, TurnCost, TurnMinimizingSearch, TurnRoute,
};
pub use grid::{Axis, Cell, Grid, Marker};
