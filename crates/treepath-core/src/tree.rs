//! Weighted tree model
//!
//! Nodes live in an arena: each node id maps to a slot, adjacency is kept as
//! slot lists in insertion order, and edge weights are stored symmetrically
//! in a slot -> (slot -> weight) map. Removing a node vacates its slot; adding
//! the same id again appends a fresh slot, so iteration order always follows
//! insertion order. Once vacated slots outnumber live ones the arena is
//! compacted, so add/remove churn keeps it at most twice the node count.
//!
//! The structure is intended to be a tree but mutation does not enforce it;
//! use [`WeightedTree::is_acyclic`] to check on demand.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Result, TreePathError};

/// Caller-assigned node identifier
pub type NodeId = i64;

/// Handle to a node in a [`WeightedTree`]
///
/// Two handles are equal iff their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TreeNode {
    id: NodeId,
}

impl TreeNode {
    pub(crate) fn new(id: NodeId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl std::fmt::Display for TreeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[derive(Debug, Clone)]
struct NodeEntry {
    id: NodeId,
    neighbors: Vec<usize>,
}

/// An undirected, weighted graph that is expected to be a tree
#[derive(Debug, Clone, Default)]
pub struct WeightedTree {
    slots: Vec<Option<NodeEntry>>,
    index: HashMap<NodeId, usize>,
    weights: HashMap<usize, HashMap<usize, f64>>,
}

impl WeightedTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or return the existing one with the same id
    pub fn add_node(&mut self, id: NodeId) -> TreeNode {
        if !self.index.contains_key(&id) {
            self.index.insert(id, self.slots.len());
            self.slots.push(Some(NodeEntry {
                id,
                neighbors: Vec::new(),
            }));
        }
        TreeNode::new(id)
    }

    /// Remove a node and every edge incident to it
    ///
    /// Returns false if no node with this id exists.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(slot) = self.index.remove(&id) else {
            return false;
        };
        let Some(entry) = self.slots[slot].take() else {
            return false;
        };

        for neighbor in entry.neighbors {
            if let Some(Some(neighbor_entry)) = self.slots.get_mut(neighbor) {
                neighbor_entry.neighbors.retain(|&s| s != slot);
            }
            self.remove_weight(neighbor, slot);
        }
        self.weights.remove(&slot);

        if self.slots.len() - self.index.len() > self.index.len() {
            self.compact();
        }
        true
    }

    /// Connect two nodes, or update the weight of an existing edge
    ///
    /// Returns false if either node is missing, if the edge already carries
    /// `weight`, or if both ids name the same node.
    pub fn connect(&mut self, id1: NodeId, id2: NodeId, weight: f64) -> bool {
        let (Some(slot1), Some(slot2)) = (self.slot(id1), self.slot(id2)) else {
            return false;
        };
        if slot1 == slot2 {
            return false;
        }

        if let Some(&current) = self.weights.get(&slot1).and_then(|w| w.get(&slot2)) {
            if current.to_bits() == weight.to_bits() {
                return false;
            }
            self.set_weight(slot1, slot2, weight);
            self.set_weight(slot2, slot1, weight);
            return true;
        }

        self.entry_mut(slot1).neighbors.push(slot2);
        self.entry_mut(slot2).neighbors.push(slot1);
        self.set_weight(slot1, slot2, weight);
        self.set_weight(slot2, slot1, weight);
        true
    }

    /// Remove the edge between two nodes
    ///
    /// Returns false if either node is missing or they are not adjacent.
    pub fn disconnect(&mut self, id1: NodeId, id2: NodeId) -> bool {
        let (Some(slot1), Some(slot2)) = (self.slot(id1), self.slot(id2)) else {
            return false;
        };
        if !self.has_edge_slots(slot1, slot2) {
            return false;
        }

        self.entry_mut(slot1).neighbors.retain(|&s| s != slot2);
        self.entry_mut(slot2).neighbors.retain(|&s| s != slot1);
        self.remove_weight(slot1, slot2);
        self.remove_weight(slot2, slot1);
        true
    }

    pub fn has_edge(&self, id1: NodeId, id2: NodeId) -> bool {
        match (self.slot(id1), self.slot(id2)) {
            (Some(slot1), Some(slot2)) => self.has_edge_slots(slot1, slot2),
            _ => false,
        }
    }

    /// Get the weight of the edge between two nodes
    pub fn edge_weight(&self, id1: NodeId, id2: NodeId) -> Result<f64> {
        let slot1 = self.require_slot(id1)?;
        let slot2 = self.require_slot(id2)?;
        self.weights
            .get(&slot1)
            .and_then(|w| w.get(&slot2))
            .copied()
            .ok_or(TreePathError::MissingEdge { from: id1, to: id2 })
    }

    /// Get the neighbors of a node in insertion order
    pub fn neighbors(&self, id: NodeId) -> Result<Neighbors<'_>> {
        let slot = self.require_slot(id)?;
        Ok(Neighbors {
            tree: self,
            inner: self.neighbor_slots(slot).iter(),
        })
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> Result<TreeNode> {
        self.require_slot(id).map(|_| TreeNode::new(id))
    }

    /// Iterate over all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = TreeNode> + '_ {
        self.slots
            .iter()
            .flatten()
            .map(|entry| TreeNode::new(entry.id))
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.values().map(HashMap::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.weights.clear();
    }

    /// Check that the graph contains no cycle
    ///
    /// Every connected component is traversed depth-first, with roots taken
    /// in insertion order. Reaching an already visited node through any edge
    /// other than the one we arrived from is a back edge.
    pub fn is_acyclic(&self) -> Result<bool> {
        if self.is_empty() {
            return Err(TreePathError::EmptyGraph);
        }

        let mut visited = vec![false; self.slots.len()];
        // (slot, came-from slot, next neighbor position)
        let mut stack: Vec<(usize, Option<usize>, usize)> = Vec::new();

        for root in self.live_slots() {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push((root, None, 0));

            while let Some(frame) = stack.last_mut() {
                let (slot, parent, position) = *frame;
                let Some(&next) = self.neighbor_slots(slot).get(position) else {
                    stack.pop();
                    continue;
                };
                frame.2 += 1;

                if Some(next) == parent {
                    continue;
                }
                if visited[next] {
                    tracing::debug!(
                        node = self.id_of(slot),
                        neighbor = self.id_of(next),
                        "back edge found"
                    );
                    return Ok(false);
                }
                visited[next] = true;
                stack.push((next, Some(slot), 0));
            }
        }

        Ok(true)
    }

    pub fn is_cyclic(&self) -> Result<bool> {
        self.is_acyclic().map(|acyclic| !acyclic)
    }

    pub(crate) fn slot(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub(crate) fn require_slot(&self, id: NodeId) -> Result<usize> {
        self.slot(id).ok_or(TreePathError::UnknownNode { id })
    }

    pub(crate) fn neighbor_slots(&self, slot: usize) -> &[usize] {
        match self.slots.get(slot) {
            Some(Some(entry)) => &entry.neighbors,
            _ => &[],
        }
    }

    pub(crate) fn id_of(&self, slot: usize) -> NodeId {
        match self.slots.get(slot) {
            Some(Some(entry)) => entry.id,
            _ => unreachable!("slot {slot} does not hold a live node"),
        }
    }

    fn live_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.as_ref().map(|_| slot))
    }

    fn has_edge_slots(&self, slot1: usize, slot2: usize) -> bool {
        self.weights
            .get(&slot1)
            .is_some_and(|w| w.contains_key(&slot2))
    }

    fn entry_mut(&mut self, slot: usize) -> &mut NodeEntry {
        match self.slots.get_mut(slot) {
            Some(Some(entry)) => entry,
            _ => unreachable!("slot {slot} does not hold a live node"),
        }
    }

    /// Drop vacated slots, keeping live nodes in insertion order
    fn compact(&mut self) {
        let mut remap: Vec<Option<usize>> = vec![None; self.slots.len()];
        let mut slots = Vec::with_capacity(self.index.len());
        for (old, entry) in std::mem::take(&mut self.slots).into_iter().enumerate() {
            if let Some(entry) = entry {
                remap[old] = Some(slots.len());
                slots.push(Some(entry));
            }
        }

        for entry in slots.iter_mut().flatten() {
            entry.neighbors = entry.neighbors.iter().filter_map(|&s| remap[s]).collect();
        }
        for slot in self.index.values_mut() {
            if let Some(new) = remap[*slot] {
                *slot = new;
            }
        }
        self.weights = std::mem::take(&mut self.weights)
            .into_iter()
            .filter_map(|(from, row)| {
                let row = row
                    .into_iter()
                    .filter_map(|(to, weight)| Some((remap[to]?, weight)))
                    .collect();
                Some((remap[from]?, row))
            })
            .collect();
        self.slots = slots;
    }

    fn set_weight(&mut self, from: usize, to: usize, weight: f64) {
        self.weights.entry(from).or_default().insert(to, weight);
    }

    fn remove_weight(&mut self, from: usize, to: usize) {
        if let Some(row) = self.weights.get_mut(&from) {
            row.remove(&to);
            if row.is_empty() {
                self.weights.remove(&from);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn weight_record_count(&self) -> usize {
        self.weights.len()
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

/// Read-only view over a node's neighbors, in insertion order
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    tree: &'a WeightedTree,
    inner: std::slice::Iter<'a, usize>,
}

impl Iterator for Neighbors<'_> {
    type Item = TreeNode;

    fn next(&mut self) -> Option<TreeNode> {
        self.inner
            .next()
            .map(|&slot| TreeNode::new(self.tree.id_of(slot)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
