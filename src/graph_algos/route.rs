use crate::errors::PathPlannerError;
use crate::grid::{Axis, Cell};
use super::{GraphNodeMap, NO_PARENT};

/// Walk the route map back from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn trace_route<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, PathPlannerError>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        // A chain longer than the map means the parents loop
        if path.len() == node_map.len() {
            return Err(PathPlannerError::BrokenRoute { index: current_index });
        }

        if let Some((node, &(parent_index, _))) = node_map.get_index(current_index) {
            path.push(node.clone());
            current_index = parent_index;
        } else {
            return Err(PathPlannerError::BrokenRoute { index: current_index });
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return Err(PathPlannerError::BrokenRoute { index: goal_index });
    }

    Ok(path)
}

/// Count direction changes along a path of adjacent cells
/// Returns the turn count and the cells where each turn happens.
/// Recomputed from the cells alone so it never depends on search bookkeeping.
pub(crate) fn count_turns(path: &[Cell]) -> (usize, Vec<Cell>) {
    let mut corners = Vec::new();

    for window in path.windows(3) {
        let (before, at, after) = (window[0], window[1], window[2]);
        let incoming = Axis::between(before, at);
        let outgoing = Axis::between(at, after);

        if let (Some(incoming), Some(outgoing)) = (incoming, outgoing) {
            if incoming.is_turn(outgoing) {
                corners.push(at);
            }
        }
    }

    (corners.len(), corners)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::FxIndexMap;

    #[test]
    fn test_trace_route() {
        let mut node_map: FxIndexMap<&str, (usize, u32)> = FxIndexMap::default();

        let a_index = node_map.insert_full("A", (NO_PARENT, 0)).0;
        let b_index = node_map.insert_full("B", (a_index, 1)).0;
        let c_index = node_map.insert_full("C", (a_index, 3)).0;
        let d_index = node_map.insert_full("D", (c_index, 4)).0;

        assert_eq!(trace_route(&node_map, d_index).unwrap(), vec!["A", "C", "D"]);
        assert_eq!(trace_route(&node_map, b_index).unwrap(), vec!["A", "B"]);
        assert_eq!(trace_route(&node_map, a_index).unwrap(), vec!["A"]);
    }

    #[test]
    fn test_trace_route_rejects_broken_maps() {
        let mut node_map: FxIndexMap<&str, (usize, u32)> = FxIndexMap::default();
        node_map.insert("A", (1, 0));
        node_map.insert("B", (0, 1));

        // A -> B -> A never reaches the start
        assert_eq!(trace_route(&node_map, 1), Err(PathPlannerError::BrokenRoute { index: 1 }));
        assert_eq!(trace_route(&node_map, 7), Err(PathPlannerError::BrokenRoute { index: 7 }));
        assert_eq!(
            trace_route(&node_map, NO_PARENT),
            Err(PathPlannerError::BrokenRoute { index: NO_PARENT })
        );

        // Never mistaken for an unreachable goal
        assert_ne!(trace_route(&node_map, 1), Err(PathPlannerError::NoPathFound));
    }

    #[test]
    fn test_count_turns() {
        let cells = |pairs: &[(usize, usize)]| pairs.iter().map(|&p| Cell::from(p)).collect::<Vec<_>>();

        // Straight line
        assert_eq!(count_turns(&cells(&[(0, 0), (0, 1), (0, 2)])), (0, vec![]));

        // Down, right, right, up
        let path = cells(&[(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)]);
        assert_eq!(count_turns(&path), (2, vec![Cell::new(1, 0), Cell::new(1, 2)]));

        // Too short to turn
        assert_eq!(count_turns(&cells(&[(3, 3)])), (0, vec![]));
        assert_eq!(count_turns(&cells(&[(0, 0), (1, 0)])), (0, vec![]));
    }
}
