use crate::collections::{FxHashSet, FxIndexMap};
use super::{GraphNodeMap, NO_PARENT};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::trace;


/// When the search loop stops
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Stop on the first pop of a goal node
    /// Only valid when the first goal pop is guaranteed optimal
    AtGoal,
    /// Drain the whole frontier before returning
    Exhaust,
}

/// Output of a best-first traversal
#[derive(Debug)]
pub struct Exploration<N, C> {
    /// Route map: node -> (parent_index, cost when linked)
    pub node_map: GraphNodeMap<N, C>,
    /// Index of the cheapest goal node that was finalized
    pub goal_index: Option<usize>,
    /// Number of nodes expanded
    pub expanded: usize,
}

impl<N, C: Copy> Exploration<N, C> {

    /// Cost recorded for the goal node
    pub fn goal_cost(&self) -> Option<C> {
        let index = self.goal_index?;
        self.node_map.get_index(index).map(|(_, &(_, cost))| cost)
    }
}


/// Best-first traversal from `start`
/// Entries are never removed from the frontier when a cheaper route shows up,
/// stale duplicates are discarded on pop instead (lazy deletion).
/// Ties on cost are broken by discovery order in the node map.
pub fn explore<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G, termination: Termination) -> Exploration<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Frontier - binary heap sorts Biggest to Smallest, NodeId reverses the ordering
    let mut frontier: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // For the start node, parent_index is set to NO_PARENT to indicate it has no parent
    let mut node_map: FxIndexMap<N, (usize, C)> = FxIndexMap::default();

    // Indices whose cost is final, grow-only
    let mut finalized: FxHashSet<usize> = FxHashSet::default();

    let start_index = node_map.insert_full(start, (NO_PARENT, Zero::zero())).0;
    frontier.push(NodeId {
        index: start_index,
        cost: Zero::zero(),
    });

    let mut goal_index = None;
    let mut expanded = 0;

    while let Some(NodeId { cost, index }) = frontier.pop() {

        // Already finalized under an equal or lower cost
        if finalized.contains(&index) {
            continue;
        }

        let Some((node, &(_, c))) = node_map.get_index(index) else {
            continue;
        };

        // A cheaper entry for this node is still queued
        if cost > c {
            continue;
        }

        finalized.insert(index);

        // Pops are non-decreasing in cost, the first goal finalized is the cheapest
        if goal_index.is_none() && goal_fn(node) {
            goal_index = Some(index);
            if termination == Termination::AtGoal {
                break;
            }
        }

        expanded += 1;
        trace!(?node, ?c, "Expanding node");

        let successors = neighbors(node);
        for (neighbor, edge_cost) in successors {

            // new cost to reach this node = edge cost + node cost
            let new_cost = c + edge_cost;

            let neighbor_index = match node_map.entry(neighbor) {
                Vacant(e) => {
                    // First time we're seeing this neighbor
                    let i = e.index();
                    e.insert((index, new_cost));
                    i
                }
                Occupied(mut e) => {
                    // Compare against the cost recorded on the route
                    if finalized.contains(&e.index()) || e.get().1 <= new_cost {
                        continue;
                    }
                    e.insert((index, new_cost));
                    e.index()
                }
            };

            frontier.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    Exploration { node_map, goal_index, expanded }
}


/// Frontier entry
/// - ordered by cost, then by node index so ties resolve in discovery order
/// - ordering is reversed so BinaryHeap pops the cheapest first
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.index == other.index
    }
}
impl<T: PartialEq> Eq for NodeId<T> {}
