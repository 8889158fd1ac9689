//! Path reconstruction shared by every search strategy

use std::collections::HashMap;

use crate::error::Result;
use crate::path::WeightedPath;
use crate::tree::{NodeId, WeightedTree};

/// Parent links recorded during a traversal; `None` marks the root
pub type ParentMap = HashMap<usize, Option<usize>>;

/// Resolve both endpoints of a search to arena slots
pub fn check_terminal_nodes(
    tree: &WeightedTree,
    source: NodeId,
    target: NodeId,
) -> Result<(usize, usize)> {
    let source_slot = tree.require_slot(source)?;
    let target_slot = tree.require_slot(target)?;
    Ok((source_slot, target_slot))
}

/// Walk parent links from `target` back to the root, then reverse
pub fn traceback(target: usize, parents: &ParentMap) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = Some(target);

    while let Some(slot) = current {
        path.push(slot);
        current = parents.get(&slot).copied().flatten();
    }

    path.reverse();
    path
}

/// Join a forward traceback to `touch` with the backward parent chain after it
pub fn traceback_bidirectional(
    touch: usize,
    forward: &ParentMap,
    backward: &ParentMap,
) -> Vec<usize> {
    let mut path = traceback(touch, forward);
    let mut current = backward.get(&touch).copied().flatten();

    while let Some(slot) = current {
        path.push(slot);
        current = backward.get(&slot).copied().flatten();
    }

    path
}

/// Convert a slot sequence into a [`WeightedPath`]
pub fn build_path(tree: &WeightedTree, slots: &[usize]) -> Result<WeightedPath> {
    WeightedPath::from_slots(tree, slots)
}
