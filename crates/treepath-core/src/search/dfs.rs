use crate::error::{Result, TreePathError};
use crate::path::WeightedPath;
use crate::search::traceback::{build_path, check_terminal_nodes, traceback, ParentMap};
use crate::search::Pathfinder;
use crate::tree::{NodeId, WeightedTree};

/// Depth-first search from the source
///
/// Neighbors are explored in adjacency order. The traversal keeps an explicit
/// stack of `(node, next neighbor position)` frames instead of recursing, so
/// arbitrarily deep trees are safe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirstSearch;

fn dfs_search(tree: &WeightedTree, source: usize, target: usize) -> (bool, ParentMap) {
    let mut parents = ParentMap::new();
    let mut stack: Vec<(usize, usize)> = vec![(source, 0)];
    parents.insert(source, None);

    while let Some(frame) = stack.last_mut() {
        let (current, position) = *frame;
        let Some(&neighbor) = tree.neighbor_slots(current).get(position) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        if parents.contains_key(&neighbor) {
            continue;
        }
        parents.insert(neighbor, Some(current));

        if neighbor == target {
            return (true, parents);
        }
        stack.push((neighbor, 0));
    }

    (false, parents)
}

impl Pathfinder for DepthFirstSearch {
    #[tracing::instrument(skip(self, tree), fields(strategy = self.name()))]
    fn search(&self, tree: &WeightedTree, source: NodeId, target: NodeId) -> Result<WeightedPath> {
        let (source_slot, target_slot) = check_terminal_nodes(tree, source, target)?;
        if source_slot == target_slot {
            return build_path(tree, &[source_slot]);
        }

        let (found, parents) = dfs_search(tree, source_slot, target_slot);
        tracing::debug!(found, visited = parents.len(), "dfs finished");

        if !found {
            return Err(TreePathError::path_not_found(source, target));
        }
        build_path(tree, &traceback(target_slot, &parents))
    }

    fn name(&self) -> &'static str {
        "dfs"
    }
}
