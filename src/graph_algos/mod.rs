
pub mod best_first;
pub mod min_turns;
pub mod shortest_route;
mod route;

pub use min_turns::{TurnCost, TurnMinimizingSearch, TurnRoute};
pub use shortest_route::{ShortestPathSearch, ShortestRoute};

use crate::collections::FxIndexMap;
use crate::errors::{PathPlannerError, PlanResult};
use crate::grid::{Cell, Grid};

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Parent index of the start node
pub const NO_PARENT: usize = usize::MAX;


/// Result of a search
/// An unreachable goal is an ordinary outcome, not an error
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<T> {
    Found(T),
    NoPathFound,
}

impl<T> SearchOutcome<T> {

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn found(&self) -> Option<&T> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::NoPathFound => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::NoPathFound => None,
        }
    }

    /// For callers that treat a missing path as an error
    pub fn into_result(self) -> PlanResult<T> {
        self.into_option().ok_or(PathPlannerError::NoPathFound)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> SearchOutcome<U> {
        match self {
            SearchOutcome::Found(route) => SearchOutcome::Found(f(route)),
            SearchOutcome::NoPathFound => SearchOutcome::NoPathFound,
        }
    }
}


/// Reject endpoints the searches cannot start from or finish on
pub(crate) fn check_endpoints(grid: &Grid, start: Cell, end: Cell) -> PlanResult<()> {
    for cell in [start, end] {
        if !grid.contains(cell) {
            return Err(PathPlannerError::out_of_bounds(cell, grid.size()));
        }
        if !grid.is_open(cell) {
            return Err(PathPlannerError::BlockedCell(cell));
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_conversions() {
        let found: SearchOutcome<usize> = SearchOutcome::Found(3);
        assert!(found.is_found());
        assert_eq!(found.found(), Some(&3));
        assert_eq!(found.clone().map(|n| n * 2), SearchOutcome::Found(6));
        assert_eq!(found.into_result(), Ok(3));

        let missing: SearchOutcome<usize> = SearchOutcome::NoPathFound;
        assert!(!missing.is_found());
        assert_eq!(missing.clone().into_option(), None);
        assert_eq!(missing.into_result(), Err(PathPlannerError::NoPathFound));
    }

    #[test]
    fn test_check_endpoints() {
        let grid = Grid::from_rows(&["..", "x."]).unwrap();
        assert!(check_endpoints(&grid, Cell::new(0, 0), Cell::new(1, 1)).is_ok());
        assert_eq!(
            check_endpoints(&grid, Cell::new(0, 0), Cell::new(2, 0)),
            Err(PathPlannerError::out_of_bounds(Cell::new(2, 0), 2))
        );
        assert_eq!(
            check_endpoints(&grid, Cell::new(1, 0), Cell::new(0, 0)),
            Err(PathPlannerError::BlockedCell(Cell::new(1, 0)))
        );
    }
}
