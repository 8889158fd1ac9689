//! Bidirectional iterative-deepening depth-first search
//!
//! The maximum depth is split into a forward budget (`max / 2`) and a
//! backward budget (the rest). Each round collects every node at exactly the
//! current forward depth, then probes backward from the target at the current
//! backward depth and one deeper (capped at the backward budget). The two
//! depth counters grow strictly alternately, forward first, until their sum
//! exceeds the maximum depth.
//!
//! On a hit, the backward stack holds the suffix from the meeting node to the
//! target and the prefix up to the meeting node is resolved by a recursive
//! search.

use std::collections::{HashSet, VecDeque};

use crate::error::{Result, TreePathError};
use crate::path::WeightedPath;
use crate::search::traceback::{build_path, check_terminal_nodes};
use crate::search::{check_maximum_depth, Pathfinder};
use crate::tree::{NodeId, WeightedTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidirectionalIterativeDeepeningSearch {
    max_depth: usize,
}

impl BidirectionalIterativeDeepeningSearch {
    /// Fails with [`TreePathError::InvalidValue`] on a negative depth
    pub fn new(max_depth: i64) -> Result<Self> {
        Ok(Self {
            max_depth: check_maximum_depth(max_depth)?,
        })
    }

    pub fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn search_slots(
        &self,
        tree: &WeightedTree,
        source: usize,
        target: usize,
    ) -> Result<Vec<usize>> {
        if source == target {
            return Ok(vec![source]);
        }

        let total_forward_depth = self.max_depth / 2;
        let total_backward_depth = self.max_depth - total_forward_depth;

        let mut forward_depth: usize = 0;
        let mut backward_depth: usize = 0;
        let mut increment_forward = true;

        let mut frontier: HashSet<usize> = HashSet::new();
        let mut visited: HashSet<usize> = HashSet::new();
        let mut backward_stack: VecDeque<usize> = VecDeque::new();

        while forward_depth.saturating_add(backward_depth) <= self.max_depth {
            visited.clear();
            visited.insert(source);
            collect_frontier(tree, source, forward_depth, &mut frontier, &mut visited);

            // Forward depths only grow, so an empty frontier stays empty.
            if frontier.is_empty() {
                break;
            }

            let window_end = backward_depth.saturating_add(1).min(total_backward_depth);
            for depth in backward_depth..=window_end {
                visited.clear();
                visited.insert(target);

                let probe = BackwardProbe {
                    tree,
                    frontier: &frontier,
                    visited: &mut visited,
                    stack: &mut backward_stack,
                };
                if let Some(meeting) = probe.run(target, depth) {
                    tracing::trace!(
                        meeting = tree.id_of(meeting),
                        forward_depth,
                        backward_depth = depth,
                        "depth windows meet"
                    );
                    return self.join(tree, source, meeting, backward_stack);
                }
            }

            frontier.clear();
            backward_stack.clear();

            if increment_forward {
                forward_depth += 1;
            } else {
                backward_depth += 1;
            }
            increment_forward = !increment_forward;
        }

        Err(TreePathError::path_not_found(
            tree.id_of(source),
            tree.id_of(target),
        ))
    }

    /// Prefix up to the meeting node, followed by the backward suffix
    fn join(
        &self,
        tree: &WeightedTree,
        source: usize,
        meeting: usize,
        suffix: VecDeque<usize>,
    ) -> Result<Vec<usize>> {
        let mut path = self.search_slots(tree, source, meeting)?;
        path.pop();
        path.extend(suffix);
        Ok(path)
    }
}

impl Default for BidirectionalIterativeDeepeningSearch {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Record every node at exactly `depth` hops from `node`
fn collect_frontier(
    tree: &WeightedTree,
    node: usize,
    depth: usize,
    frontier: &mut HashSet<usize>,
    visited: &mut HashSet<usize>,
) {
    if depth == 0 {
        frontier.insert(node);
        return;
    }

    for &neighbor in tree.neighbor_slots(node) {
        if !visited.insert(neighbor) {
            continue;
        }
        collect_frontier(tree, neighbor, depth - 1, frontier, visited);
    }
}

/// Depth-limited search from the target looking for a frontier node
struct BackwardProbe<'a> {
    tree: &'a WeightedTree,
    frontier: &'a HashSet<usize>,
    visited: &'a mut HashSet<usize>,
    /// Front-inserted: the front is the deepest node, the back is the target
    stack: &'a mut VecDeque<usize>,
}

impl BackwardProbe<'_> {
    fn run(mut self, root: usize, depth: usize) -> Option<usize> {
        self.descend(root, depth)
    }

    fn descend(&mut self, node: usize, depth: usize) -> Option<usize> {
        self.stack.push_front(node);

        if depth == 0 {
            if self.frontier.contains(&node) {
                return Some(node);
            }
            self.stack.pop_front();
            return None;
        }

        for &neighbor in self.tree.neighbor_slots(node) {
            if !self.visited.insert(neighbor) {
                continue;
            }
            if let Some(meeting) = self.descend(neighbor, depth - 1) {
                return Some(meeting);
            }
        }

        self.stack.pop_front();
        None
    }
}

impl Pathfinder for BidirectionalIterativeDeepeningSearch {
    #[tracing::instrument(
        skip(self, tree),
        fields(strategy = self.name(), max_depth = self.max_depth)
    )]
    fn search(&self, tree: &WeightedTree, source: NodeId, target: NodeId) -> Result<WeightedPath> {
        let (source_slot, target_slot) = check_terminal_nodes(tree, source, target)?;
        let path = self.search_slots(tree, source_slot, target_slot)?;
        tracing::debug!(hops = path.len() - 1, "bidirectional iddfs finished");
        build_path(tree, &path)
    }

    fn name(&self) -> &'static str {
        "bidirectional-iddfs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(length: NodeId) -> WeightedTree {
        let mut tree = WeightedTree::new();
        for id in 0..length {
            tree.add_node(id);
        }
        for id in 1..length {
            tree.connect(id - 1, id, 1.0);
        }
        tree
    }

    #[test]
    fn test_depth_bound_failure() {
        let tree = chain(4);
        let finder = BidirectionalIterativeDeepeningSearch::new(2).unwrap();

        let err = finder.search(&tree, 0, 3).unwrap_err();
        assert!(matches!(err, TreePathError::PathNotFound { from: 0, to: 3 }));
    }

    #[test]
    fn test_sufficient_depth_succeeds() {
        let tree = chain(4);
        let finder = BidirectionalIterativeDeepeningSearch::new(3).unwrap();

        let path = finder.search(&tree, 0, 3).unwrap();
        assert_eq!(path.node_ids(), vec![0, 1, 2, 3]);
        assert!((path.total_cost() - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_rejects_negative_depth() {
        assert!(matches!(
            BidirectionalIterativeDeepeningSearch::new(-3),
            Err(TreePathError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_zero_depth() {
        let tree = chain(2);
        let finder = BidirectionalIterativeDeepeningSearch::new(0).unwrap();

        assert_eq!(finder.search(&tree, 0, 0).unwrap().node_count(), 1);
        assert!(finder.search(&tree, 0, 1).is_err());
    }

    #[test]
    fn test_unbounded_search_terminates_on_unreachable_target() {
        let mut tree = chain(3);
        tree.add_node(50);

        let err = BidirectionalIterativeDeepeningSearch::unbounded()
            .search(&tree, 0, 50)
            .unwrap_err();
        assert!(matches!(err, TreePathError::PathNotFound { from: 0, to: 50 }));
    }

    #[test]
    fn test_backward_probe_keeps_suffix_on_hit() {
        let tree = chain(4);
        let slots: Vec<usize> = (0..4).map(|id| tree.slot(id).unwrap()).collect();
        let frontier = HashSet::from([slots[1]]);
        let mut visited = HashSet::from([slots[3]]);
        let mut stack = VecDeque::new();

        let probe = BackwardProbe {
            tree: &tree,
            frontier: &frontier,
            visited: &mut visited,
            stack: &mut stack,
        };
        assert_eq!(probe.run(slots[3], 2), Some(slots[1]));
        assert_eq!(
            stack.into_iter().collect::<Vec<_>>(),
            vec![slots[1], slots[2], slots[3]]
        );
    }

    #[test]
    fn test_collect_frontier_exact_depth() {
        let mut tree = WeightedTree::new();
        for id in 0..5 {
            tree.add_node(id);
        }
        tree.connect(0, 1, 1.0);
        tree.connect(0, 2, 1.0);
        tree.connect(1, 3, 1.0);
        tree.connect(2, 4, 1.0);

        let root = tree.slot(0).unwrap();
        let mut frontier = HashSet::new();
        let mut visited = HashSet::from([root]);
        collect_frontier(&tree, root, 2, &mut frontier, &mut visited);

        let expected: HashSet<usize> = [3, 4].iter().map(|&id| tree.slot(id).unwrap()).collect();
        assert_eq!(frontier, expected);
    }
}
