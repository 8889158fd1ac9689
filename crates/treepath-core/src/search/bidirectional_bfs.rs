use std::collections::{HashMap, VecDeque};

use crate::error::{Result, TreePathError};
use crate::path::WeightedPath;
use crate::search::traceback::{
    build_path, check_terminal_nodes, traceback_bidirectional, ParentMap,
};
use crate::search::Pathfinder;
use crate::tree::{NodeId, WeightedTree};

/// Bidirectional breadth-first search
///
/// Grows one frontier from the source and one from the target, always
/// expanding the smaller search area. Stops once the best meeting found so
/// far is cheaper than the sum of the distances at the heads of both queues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BidirectionalBreadthFirstSearch;

/// One direction of the search
struct Frontier {
    queue: VecDeque<usize>,
    parents: ParentMap,
    distances: HashMap<usize, usize>,
}

impl Frontier {
    fn new(root: usize) -> Self {
        Self {
            queue: VecDeque::from([root]),
            parents: ParentMap::from([(root, None)]),
            distances: HashMap::from([(root, 0)]),
        }
    }

    fn head_distance(&self) -> Option<usize> {
        self.queue
            .front()
            .and_then(|head| self.distances.get(head).copied())
    }

    /// Nodes queued plus nodes already discovered
    fn search_area(&self) -> usize {
        self.queue.len() + self.parents.len()
    }

    fn enqueue_neighbors(&mut self, tree: &WeightedTree, node: usize) {
        let distance = self.distances.get(&node).copied().unwrap_or_default() + 1;
        for &neighbor in tree.neighbor_slots(node) {
            if self.parents.contains_key(&neighbor) {
                continue;
            }
            self.parents.insert(neighbor, Some(node));
            self.distances.insert(neighbor, distance);
            self.queue.push_back(neighbor);
        }
    }
}

/// Best meeting point found so far
#[derive(Debug, Clone, Copy)]
struct Meeting {
    node: usize,
    cost: usize,
}

/// Expand the head of `side`, recording a meeting if `other` already knows it
fn expand(
    tree: &WeightedTree,
    side: &mut Frontier,
    other: &Frontier,
    best: &mut Option<Meeting>,
) {
    let Some(current) = side.queue.pop_front() else {
        return;
    };

    if let Some(&opposite) = other.distances.get(&current) {
        let cost = side.distances.get(&current).copied().unwrap_or_default() + opposite;
        if best.is_none_or(|meeting| cost < meeting.cost) {
            tracing::trace!(node = tree.id_of(current), cost, "frontiers touch");
            *best = Some(Meeting {
                node: current,
                cost,
            });
        }
    }

    side.enqueue_neighbors(tree, current);
}

fn bidirectional_search(
    tree: &WeightedTree,
    source: usize,
    target: usize,
) -> (Option<Meeting>, Frontier, Frontier) {
    let mut forward = Frontier::new(source);
    let mut backward = Frontier::new(target);
    let mut best: Option<Meeting> = None;

    while let (Some(forward_distance), Some(backward_distance)) =
        (forward.head_distance(), backward.head_distance())
    {
        if let Some(meeting) = best {
            if meeting.cost < forward_distance + backward_distance {
                break;
            }
        }

        if forward.search_area() < backward.search_area() {
            expand(tree, &mut forward, &backward, &mut best);
        } else {
            expand(tree, &mut backward, &forward, &mut best);
        }
    }

    (best, forward, backward)
}

impl Pathfinder for BidirectionalBreadthFirstSearch {
    #[tracing::instrument(skip(self, tree), fields(strategy = self.name()))]
    fn search(&self, tree: &WeightedTree, source: NodeId, target: NodeId) -> Result<WeightedPath> {
        let (source_slot, target_slot) = check_terminal_nodes(tree, source, target)?;
        if source_slot == target_slot {
            return build_path(tree, &[source_slot]);
        }

        let (best, forward, backward) = bidirectional_search(tree, source_slot, target_slot);
        tracing::debug!(
            forward_discovered = forward.parents.len(),
            backward_discovered = backward.parents.len(),
            found = best.is_some(),
            "bidirectional bfs finished"
        );

        let Some(meeting) = best else {
            return Err(TreePathError::path_not_found(source, target));
        };
        build_path(
            tree,
            &traceback_bidirectional(meeting.node, &forward.parents, &backward.parents),
        )
    }

    fn name(&self) -> &'static str {
        "bidirectional-bfs"
    }
}
