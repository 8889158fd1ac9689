//! Path results returned by every search strategy

use serde::Serialize;

use crate::error::{Result, TreePathError};
use crate::tree::{NodeId, TreeNode, WeightedTree};

/// An edge between two consecutive nodes of a [`WeightedPath`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedEdge {
    pub from: TreeNode,
    pub to: TreeNode,
    pub weight: f64,
}

/// An ordered walk through a tree with its edges and total cost
///
/// Equality compares the node sequence only.
#[derive(Debug, Clone, Serialize)]
pub struct WeightedPath {
    nodes: Vec<TreeNode>,
    edges: Vec<WeightedEdge>,
    total_cost: f64,
}

impl WeightedPath {
    /// Build a path from a node sequence
    ///
    /// Fails with [`TreePathError::NotAWalk`] if two consecutive nodes are
    /// not adjacent in `tree`.
    pub fn new(tree: &WeightedTree, node_ids: &[NodeId]) -> Result<Self> {
        if node_ids.is_empty() {
            crate::bail_invalid!("path", "empty node sequence");
        }

        let mut nodes = Vec::with_capacity(node_ids.len());
        for &id in node_ids {
            nodes.push(tree.node(id)?);
        }

        let mut edges = Vec::with_capacity(nodes.len() - 1);
        let mut total_cost = 0.0;
        for pair in nodes.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let weight = tree
                .edge_weight(from.id(), to.id())
                .map_err(|_| TreePathError::NotAWalk {
                    from: from.id(),
                    to: to.id(),
                })?;
            total_cost += weight;
            edges.push(WeightedEdge { from, to, weight });
        }

        Ok(Self {
            nodes,
            edges,
            total_cost,
        })
    }

    /// Build a path from arena slots produced by a search
    pub(crate) fn from_slots(tree: &WeightedTree, slots: &[usize]) -> Result<Self> {
        let ids: Vec<NodeId> = slots.iter().map(|&slot| tree.id_of(slot)).collect();
        Self::new(tree, &ids)
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(TreeNode::id).collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn source(&self) -> TreeNode {
        self.nodes[0]
    }

    pub fn target(&self) -> TreeNode {
        self.nodes[self.nodes.len() - 1]
    }
}

impl PartialEq for WeightedPath {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl Eq for WeightedPath {}

impl std::fmt::Display for WeightedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
