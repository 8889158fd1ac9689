//! Star-shaped tree generation
//!
//! The root gets `degree` children and every other inner node gets
//! `degree - 1`, so each inner node ends up with exactly `degree` neighbors.
//! A radius of `r > 0` produces leaves `r + 1` hops from the root.

use rand::Rng;

use crate::error::Result;
use crate::tree::{NodeId, TreeNode, WeightedTree};

#[derive(Debug)]
pub struct StarTreeBuilder<R> {
    degree: usize,
    radius: usize,
    rng: R,
}

impl<R: Rng> StarTreeBuilder<R> {
    /// Fails with [`crate::error::TreePathError::InvalidValue`] when
    /// `degree < 2` or `radius < 0`
    pub fn new(degree: i64, radius: i64, rng: R) -> Result<Self> {
        if degree < 2 {
            crate::bail_invalid!("degree", format!("{} (must be at least 2)", degree));
        }
        if radius < 0 {
            crate::bail_invalid!("radius", format!("{} (must be at least 0)", radius));
        }

        Ok(Self {
            degree: usize::try_from(degree).unwrap_or(usize::MAX),
            radius: usize::try_from(radius).unwrap_or(usize::MAX),
            rng,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Build a fresh tree; ids are assigned from 0 in creation order
    ///
    /// Children are numbered depth-first: each child's whole subtree is
    /// created before its next sibling.
    pub fn build(&mut self) -> WeightedTree {
        let start = std::time::Instant::now();
        let mut growth = Growth {
            tree: WeightedTree::new(),
            next_id: 0,
            rng: &mut self.rng,
        };

        let root = growth.add_node();
        if self.radius > 0 {
            growth.grow(root, self.degree, self.radius - 1);
        }

        crate::trace_time!(start, "build_star_tree", nodes = growth.tree.node_count());
        growth.tree
    }
}

/// A node still receiving children during growth
struct Frame {
    node: TreeNode,
    /// Children still to attach
    pending: usize,
    /// Radius handed to each child; `None` makes the children leaves
    child_radius: Option<usize>,
}

struct Growth<'a, R> {
    tree: WeightedTree,
    next_id: NodeId,
    rng: &'a mut R,
}

impl<R: Rng> Growth<'_, R> {
    fn add_node(&mut self) -> TreeNode {
        let node = self.tree.add_node(self.next_id);
        self.next_id += 1;
        node
    }

    fn attach(&mut self, parent: TreeNode) -> TreeNode {
        let child = self.add_node();
        let weight: f64 = self.rng.gen();
        self.tree.connect(child.id(), parent.id(), weight);
        child
    }

    /// Attach `degree` children to `root` and grow every inner node below it
    /// with `degree - 1` children, using an explicit stack of frames
    fn grow(&mut self, root: TreeNode, degree: usize, radius: usize) {
        let mut stack = vec![Frame {
            node: root,
            pending: degree,
            child_radius: Some(radius),
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.pending == 0 {
                stack.pop();
                continue;
            }
            frame.pending -= 1;
            let (parent, child_radius) = (frame.node, frame.child_radius);

            let child = self.attach(parent);
            if let Some(remaining) = child_radius {
                stack.push(Frame {
                    node: child,
                    pending: degree - 1,
                    child_radius: remaining.checked_sub(1),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreePathError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn builder(degree: i64, radius: i64) -> StarTreeBuilder<StdRng> {
        StarTreeBuilder::new(degree, radius, StdRng::seed_from_u64(7)).unwrap()
    }

    #[test]
    fn test_rejects_small_degree() {
        let err = StarTreeBuilder::new(1, 3, StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(
            err,
            TreePathError::InvalidValue { ref context, .. } if context == "degree"
        ));
    }

    #[test]
    fn test_rejects_negative_radius() {
        let err = StarTreeBuilder::new(3, -1, StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(
            err,
            TreePathError::InvalidValue { ref context, .. } if context == "radius"
        ));
    }

    #[test]
    fn test_zero_radius_is_single_node() {
        let tree = builder(4, 0).build();
        assert_eq!(tree.node_count(), 1);
        assert!(tree.contains(0));
        assert_eq!(tree.edge_count(), 0);
    }

    #[test]
    fn test_node_counts() {
        assert_eq!(builder(3, 1).build().node_count(), 10);
        assert_eq!(builder(2, 1).build().node_count(), 5);
        // 1 + 4 + 12 + 36
        assert_eq!(builder(4, 2).build().node_count(), 53);
    }

    #[test]
    fn test_ids_are_sequential_and_tree_is_acyclic() {
        let tree = builder(3, 3).build();
        let count = tree.node_count() as NodeId;

        assert!((0..count).all(|id| tree.contains(id)));
        assert_eq!(tree.edge_count(), tree.node_count() - 1);
        assert!(tree.is_acyclic().unwrap());
    }

    #[test]
    fn test_ids_follow_depth_first_creation_order() {
        let tree = builder(3, 1).build();
        let neighbor_ids = |id: NodeId| -> Vec<NodeId> {
            tree.neighbors(id).unwrap().map(|node| node.id()).collect()
        };

        assert_eq!(neighbor_ids(0), vec![1, 4, 7]);
        assert_eq!(neighbor_ids(1), vec![0, 2, 3]);
        assert_eq!(neighbor_ids(4), vec![0, 5, 6]);
        assert_eq!(neighbor_ids(7), vec![0, 8, 9]);
    }

    #[test]
    fn test_deep_radius_does_not_overflow() {
        let radius = 250_000;
        let tree = builder(2, radius).build();

        // Two chains of radius + 1 nodes hang off the root.
        assert_eq!(tree.node_count(), 1 + 2 * (radius as usize + 1));
        assert_eq!(tree.neighbors(0).unwrap().len(), 2);
        assert!(tree.is_acyclic().unwrap());

        let last = tree.node_count() as NodeId - 1;
        assert_eq!(tree.neighbors(last).unwrap().len(), 1);
    }

    #[test]
    fn test_inner_nodes_have_degree_neighbors() {
        let tree = builder(3, 2).build();
        assert_eq!(tree.neighbors(0).unwrap().len(), 3);
        // Node 1 is the first child of the root, node 2 its first child.
        assert_eq!(tree.neighbors(1).unwrap().len(), 3);
        assert_eq!(tree.neighbors(2).unwrap().len(), 3);
    }

    #[test]
    fn test_weights_in_unit_interval() {
        let tree = builder(4, 2).build();
        for node in tree.nodes() {
            for neighbor in tree.neighbors(node.id()).unwrap() {
                let weight = tree.edge_weight(node.id(), neighbor.id()).unwrap();
                assert!((0.0..1.0).contains(&weight));
            }
        }
    }

    #[test]
    fn test_same_seed_same_tree() {
        let first = builder(3, 2).build();
        let second = builder(3, 2).build();

        for node in first.nodes() {
            for neighbor in first.neighbors(node.id()).unwrap() {
                assert_eq!(
                    first.edge_weight(node.id(), neighbor.id()).unwrap(),
                    second.edge_weight(node.id(), neighbor.id()).unwrap()
                );
            }
        }
    }
}
