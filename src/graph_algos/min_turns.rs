use crate::errors::PlanResult;
use crate::grid::{Axis, Cell, Grid};
use super::best_first::{explore, Termination};
use super::route::{count_turns, trace_route};
use super::{check_endpoints, SearchOutcome};

use std::ops::Add;
use num_traits::Zero;
use tracing::{debug, warn};


/// Cost of a partial route: turns first, steps break ties
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TurnCost {
    pub turns: usize,
    pub steps: usize,
}

impl TurnCost {
    /// Cost of a single step
    fn step(turned: bool) -> Self {
        Self {
            turns: usize::from(turned),
            steps: 1,
        }
    }
}

impl Add for TurnCost {
    type Output = TurnCost;

    fn add(self, other: TurnCost) -> TurnCost {
        TurnCost {
            turns: self.turns + other.turns,
            steps: self.steps + other.steps,
        }
    }
}

impl Zero for TurnCost {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.turns == 0 && self.steps == 0
    }
}


/// Search state: a cell plus the axis used to enter it (None at the start)
/// Two arrivals with equal turns on different axes must both survive,
/// the next move only costs a turn for one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Heading {
    cell: Cell,
    axis: Option<Axis>,
}


/// Route with the fewest direction changes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRoute {
    pub turn_count: usize,
    /// Cells on the route, start and end included
    pub path_length: usize,
    pub path: Vec<Cell>,
    /// Cells where the route changes axis, in travel order
    pub corners: Vec<Cell>,
    /// States expanded by the search
    pub expanded: usize,
}


/// Best-first search keyed by the number of turns
/// The first move out of the start never counts as a turn.
#[derive(Clone, Copy, Debug)]
pub struct TurnMinimizingSearch<'g> {
    start: Cell,
    end: Cell,
    grid: &'g Grid,
}

impl<'g> TurnMinimizingSearch<'g> {

    /// Both endpoints must be inside the grid and open
    pub fn new(start: Cell, end: Cell, grid: &'g Grid) -> PlanResult<Self> {
        check_endpoints(grid, start, end)?;
        Ok(Self { start, end, grid })
    }

    /// Find the route from start to end with the fewest turns
    /// The frontier is drained completely before the route is built.
    pub fn search(&self) -> SearchOutcome<TurnRoute> {
        let grid = self.grid;
        let end = self.end;

        let start = Heading { cell: self.start, axis: None };
        let exploration = explore(
            start,
            move |from: &Heading| {
                let from = *from;
                grid.neighbors(from.cell).filter_map(move |next| {
                    let axis = Axis::between(from.cell, next)?;
                    let turned = from.axis.is_some_and(|prev| prev.is_turn(axis));
                    Some((Heading { cell: next, axis: Some(axis) }, TurnCost::step(turned)))
                })
            },
            |heading| heading.cell == end,
            Termination::Exhaust,
        );

        let (Some(goal_index), Some(cost)) = (exploration.goal_index, exploration.goal_cost()) else {
            debug!(start = %self.start, end = %self.end, expanded = exploration.expanded, "No path found");
            return SearchOutcome::NoPathFound;
        };

        let headings = match trace_route(&exploration.node_map, goal_index) {
            Ok(headings) => headings,
            Err(err) => {
                warn!(%err, "Route map is inconsistent");
                return SearchOutcome::NoPathFound;
            }
        };
        let path: Vec<Cell> = headings.iter().map(|heading| heading.cell).collect();

        let (turn_count, corners) = count_turns(&path);
        debug_assert_eq!(turn_count, cost.turns);
        debug_assert_eq!(path.len(), cost.steps + 1);

        debug!(
            start = %self.start,
            end = %self.end,
            turns = turn_count,
            length = path.len(),
            expanded = exploration.expanded,
            "Found fewest-turn route"
        );

        SearchOutcome::Found(TurnRoute {
            turn_count,
            path_length: path.len(),
            path,
            corners,
            expanded: exploration.expanded,
        })
    }
}
