use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{Result, TreePathError};
use crate::path::WeightedPath;
use crate::search::traceback::{build_path, check_terminal_nodes, traceback, ParentMap};
use crate::search::Pathfinder;
use crate::tree::{NodeId, WeightedTree};

/// Breadth-first search from the source
///
/// The plain variant assumes the input is acyclic: the parent map doubles as
/// the visited set and every node is marked when first enqueued. The
/// validating variant re-enqueues nodes that have not been expanded yet and
/// fails with [`TreePathError::NotATree`] as soon as it sees evidence of a
/// cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreadthFirstSearch {
    validate: bool,
}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self { validate: false }
    }

    pub fn validating() -> Self {
        Self { validate: true }
    }

    pub fn is_validating(&self) -> bool {
        self.validate
    }
}

fn bfs_search(tree: &WeightedTree, source: usize, target: usize) -> (bool, ParentMap) {
    let mut parents = ParentMap::new();
    let mut queue = VecDeque::new();

    parents.insert(source, None);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return (true, parents);
        }

        for &neighbor in tree.neighbor_slots(current) {
            if parents.contains_key(&neighbor) {
                continue;
            }
            parents.insert(neighbor, Some(current));
            queue.push_back(neighbor);
        }
    }

    (false, parents)
}

/// BFS that fails on a node dequeued twice or below the current radius
fn bfs_search_validating(
    tree: &WeightedTree,
    source: usize,
    target: usize,
) -> Result<(bool, ParentMap)> {
    let mut parents = ParentMap::new();
    let mut depths: HashMap<usize, usize> = HashMap::new();
    let mut expanded: HashSet<usize> = HashSet::new();
    let mut queue = VecDeque::new();
    let mut radius = 0;

    parents.insert(source, None);
    depths.insert(source, 0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return Ok((true, parents));
        }

        let depth = depths.get(&current).copied().unwrap_or_default();
        if depth < radius || !expanded.insert(current) {
            tracing::debug!(node = tree.id_of(current), depth, radius, "cycle evidence");
            return Err(TreePathError::NotATree);
        }
        radius = depth;

        for &neighbor in tree.neighbor_slots(current) {
            if expanded.contains(&neighbor) {
                continue;
            }
            parents.insert(neighbor, Some(current));
            depths.insert(neighbor, depth + 1);
            queue.push_back(neighbor);
        }
    }

    Ok((false, parents))
}

impl Pathfinder for BreadthFirstSearch {
    #[tracing::instrument(skip(self, tree), fields(strategy = self.name()))]
    fn search(&self, tree: &WeightedTree, source: NodeId, target: NodeId) -> Result<WeightedPath> {
        let (source_slot, target_slot) = check_terminal_nodes(tree, source, target)?;
        if source_slot == target_slot {
            return build_path(tree, &[source_slot]);
        }

        let (found, parents) = if self.validate {
            bfs_search_validating(tree, source_slot, target_slot)?
        } else {
            bfs_search(tree, source_slot, target_slot)
        };
        tracing::debug!(found, discovered = parents.len(), "bfs finished");

        if !found {
            return Err(TreePathError::path_not_found(source, target));
        }
        build_path(tree, &traceback(target_slot, &parents))
    }

    fn name(&self) -> &'static str {
        if self.validate {
            "bfs-validating"
        } else {
            "bfs"
        }
    }
}
