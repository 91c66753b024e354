use crate::errors::PlanResult;
use crate::grid::{Cell, Grid};
use super::best_first::{explore, Termination};
use super::route::trace_route;
use super::{check_endpoints, SearchOutcome};

use tracing::{debug, warn};


/// Route with the fewest steps
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestRoute {
    /// Cells on the route, start and end included
    pub path_length: usize,
    pub path: Vec<Cell>,
    /// Cells expanded by the search
    pub expanded: usize,
}


/// Shortest path over the open cells
/// Every step costs 1, so the first time the end is popped its length is final
/// and the search stops there.
#[derive(Clone, Copy, Debug)]
pub struct ShortestPathSearch<'g> {
    start: Cell,
    end: Cell,
    grid: &'g Grid,
}

impl<'g> ShortestPathSearch<'g> {

    /// Both endpoints must be inside the grid and open
    pub fn new(start: Cell, end: Cell, grid: &'g Grid) -> PlanResult<Self> {
        check_endpoints(grid, start, end)?;
        Ok(Self { start, end, grid })
    }

    pub fn search(&self) -> SearchOutcome<ShortestRoute> {
        let grid = self.grid;
        let end = self.end;

        let exploration = explore(
            self.start,
            move |cell: &Cell| grid.neighbors(*cell).map(|next| (next, 1usize)),
            |cell| *cell == end,
            Termination::AtGoal,
        );

        let Some(goal_index) = exploration.goal_index else {
            debug!(start = %self.start, end = %self.end, expanded = exploration.expanded, "No path found");
            return SearchOutcome::NoPathFound;
        };

        let path = match trace_route(&exploration.node_map, goal_index) {
            Ok(path) => path,
            Err(err) => {
                warn!(%err, "Route map is inconsistent");
                return SearchOutcome::NoPathFound;
            }
        };
        debug_assert_eq!(Some(path.len()), exploration.goal_cost().map(|steps| steps + 1));

        debug!(
            start = %self.start,
            end = %self.end,
            length = path.len(),
            expanded = exploration.expanded,
            "Found shortest route"
        );

        SearchOutcome::Found(ShortestRoute {
            path_length: path.len(),
            path,
            expanded: exploration.expanded,
        })
    }
}
