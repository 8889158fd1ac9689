use crate::error::{Result, TreePathError};
use crate::path::WeightedPath;
use crate::search::traceback::{build_path, check_terminal_nodes, traceback, ParentMap};
use crate::search::{check_maximum_depth, Pathfinder};
use crate::tree::{NodeId, WeightedTree};

/// Iterative-deepening depth-first search
///
/// Runs depth-limited searches with limits 0, 1, 2, ... up to the maximum
/// depth, each from a clean parent map. Memory stays proportional to the
/// depth of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterativeDeepeningSearch {
    max_depth: usize,
}

impl IterativeDeepeningSearch {
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
}

impl Default for IterativeDeepeningSearch {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Outcome of one depth-limited pass
struct LimitedSearch<'a> {
    tree: &'a WeightedTree,
    target: usize,
    parents: ParentMap,
    /// Whether any node was reached with the budget exhausted
    reached_limit: bool,
}

impl LimitedSearch<'_> {
    fn run(&mut self, node: usize, depth: usize) -> bool {
        if depth == 0 {
            self.reached_limit = true;
            return node == self.target;
        }

        for &neighbor in self.tree.neighbor_slots(node) {
            if self.parents.contains_key(&neighbor) {
                continue;
            }
            self.parents.insert(neighbor, Some(node));

            if self.run(neighbor, depth - 1) {
                return true;
            }
        }

        false
    }
}

impl Pathfinder for IterativeDeepeningSearch {
    #[tracing::instrument(
        skip(self, tree),
        fields(strategy = self.name(), max_depth = self.max_depth)
    )]
    fn search(&self, tree: &WeightedTree, source: NodeId, target: NodeId) -> Result<WeightedPath> {
        let (source_slot, target_slot) = check_terminal_nodes(tree, source, target)?;
        if source_slot == target_slot {
            return build_path(tree, &[source_slot]);
        }

        let mut depth = 0;
        loop {
            let mut pass = LimitedSearch {
                tree,
                target: target_slot,
                parents: ParentMap::from([(source_slot, None)]),
                reached_limit: false,
            };

            if pass.run(source_slot, depth) {
                tracing::debug!(depth, "iddfs found target");
                return build_path(tree, &traceback(target_slot, &pass.parents));
            }

            // Nothing lies at this depth, so no deeper pass can succeed.
            if !pass.reached_limit || depth >= self.max_depth {
                tracing::debug!(depth, exhausted = !pass.reached_limit, "iddfs gave up");
                return Err(TreePathError::path_not_found(source, target));
            }
            depth += 1;
        }
    }

    fn name(&self) -> &'static str {
        "iddfs"
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
    fn test_rejects_negative_depth() {
        let err = IterativeDeepeningSearch::new(-1).unwrap_err();
        assert!(matches!(err, TreePathError::InvalidValue { .. }));
        assert!(IterativeDeepeningSearch::new(0).is_ok());
    }

    #[test]
    fn test_depth_bound() {
        let tree = chain(4);

        let err = IterativeDeepeningSearch::new(2)
            .unwrap()
            .search(&tree, 0, 3)
            .unwrap_err();
        assert!(matches!(err, TreePathError::PathNotFound { from: 0, to: 3 }));

        let path = IterativeDeepeningSearch::new(3)
            .unwrap()
            .search(&tree, 0, 3)
            .unwrap();
        assert_eq!(path.node_ids(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unbounded_search_terminates_on_unreachable_target() {
        let mut tree = chain(3);
        tree.add_node(99);

        let err = IterativeDeepeningSearch::unbounded()
            .search(&tree, 0, 99)
            .unwrap_err();
        assert!(matches!(err, TreePathError::PathNotFound { .. }));
    }

    #[test]
    fn test_zero_depth_only_finds_source() {
        let tree = chain(2);
        let finder = IterativeDeepeningSearch::new(0).unwrap();

        assert_eq!(finder.search(&tree, 1, 1).unwrap().node_count(), 1);
        assert!(finder.search(&tree, 0, 1).is_err());
    }
}
