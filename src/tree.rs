//! Owned binary search tree
//!
//! Each node exclusively owns its children; `Clone` is the deep copy every
//! emitted step takes, so a cloned snapshot is fully independent of the live
//! tree.  Subtrees are addressed by a [`Dir`] path from the root, which lets
//! the BST engine snapshot the whole tree between mutations of a deeply
//! nested link without holding a borrow across the snapshot.

use serde::Serialize;

/// An owning link to a subtree.
pub type Link = Option<Box<TreeNode>>;

/// One tree node.  BST property: everything in `left` is smaller than
/// `value`, everything in `right` is greater; duplicates are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub value: i64,
    pub left: Link,
    pub right: Link,
}

impl TreeNode {
    pub fn new(value: i64) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }
}

/// A descent direction from a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
}

/// The visualized tree.  An empty `root` is the empty tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tree {
    pub root: Link,
}

impl Tree {
    pub fn new() -> Self {
        Tree { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The link at `addr`, following `Dir`s from the root.  Returns the root
    /// link for an empty address.  Panics on an address through an absent
    /// node, which the engine never constructs.
    pub fn link_at(&self, addr: &[Dir]) -> &Link {
        let mut link = &self.root;
        for dir in addr {
            let node = link.as_ref().expect("address through absent node");
            link = match dir {
                Dir::Left => &node.left,
                Dir::Right => &node.right,
            };
        }
        link
    }

    /// Mutable counterpart of [`Tree::link_at`].
    pub fn link_at_mut(&mut self, addr: &[Dir]) -> &mut Link {
        let mut link = &mut self.root;
        for dir in addr {
            let node = link.as_mut().expect("address through absent node");
            link = match dir {
                Dir::Left => &mut node.left,
                Dir::Right => &mut node.right,
            };
        }
        link
    }

    /// Insert `value` at its BST position without emitting steps.  A
    /// duplicate leaves the tree unchanged.  Used when folding `create`'s
    /// initial values.
    pub fn attach(&mut self, value: i64) {
        attach_link(&mut self.root, value);
    }

    /// In-order traversal; strictly increasing whenever the BST property
    /// holds.
    pub fn in_order(&self) -> Vec<i64> {
        let mut values = Vec::new();
        collect_in_order(&self.root, &mut values);
        values
    }

    /// The smallest value in the subtree at `addr` (the leftmost
    /// descendant), or `None` if that subtree is absent.
    pub fn min_value_at(&self, addr: &[Dir]) -> Option<i64> {
        let mut link = self.link_at(addr);
        let mut min = None;
        while let Some(node) = link {
            min = Some(node.value);
            link = &node.left;
        }
        min
    }

    pub fn contains(&self, value: i64) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            if value < node.value {
                link = &node.left;
            } else if value > node.value {
                link = &node.right;
            } else {
                return true;
            }
        }
        false
    }

    pub fn size(&self) -> usize {
        count_nodes(&self.root)
    }

    /// Height in nodes; 0 for the empty tree.
    pub fn height(&self) -> usize {
        link_height(&self.root)
    }
}

fn attach_link(link: &mut Link, value: i64) {
    match link {
        None => *link = Some(Box::new(TreeNode::new(value))),
        Some(node) => {
            if value < node.value {
                attach_link(&mut node.left, value);
            } else if value > node.value {
                attach_link(&mut node.right, value);
            }
            // Equal: duplicate, silently not inserted.
        }
    }
}

fn collect_in_order(link: &Link, values: &mut Vec<i64>) {
    if let Some(node) = link {
        collect_in_order(&node.left, values);
        values.push(node.value);
        collect_in_order(&node.right, values);
    }
}

fn count_nodes(link: &Link) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + count_nodes(&node.left) + count_nodes(&node.right),
    }
}

fn link_height(link: &Link) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + link_height(&node.left).max(link_height(&node.right)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Tree {
        let mut tree = Tree::new();
        for value in [10, 5, 15, 3, 7, 12, 18] {
            tree.attach(value);
        }
        tree
    }

    #[test]
    fn attach_keeps_in_order_sorted() {
        let tree = sample_tree();
        assert_eq!(tree.in_order(), vec![3, 5, 7, 10, 12, 15, 18]);
    }

    #[test]
    fn attach_ignores_duplicates() {
        let mut tree = sample_tree();
        tree.attach(10);
        tree.attach(7);
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.in_order(), vec![3, 5, 7, 10, 12, 15, 18]);
    }

    #[test]
    fn shape_follows_insertion_order() {
        let tree = sample_tree();
        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.value, 10);
        assert_eq!(root.left.as_ref().unwrap().value, 5);
        assert_eq!(root.right.as_ref().unwrap().value, 15);
        assert_eq!(root.right.as_ref().unwrap().left.as_ref().unwrap().value, 12);
    }

    #[test]
    fn link_at_follows_directions() {
        let tree = sample_tree();
        let link = tree.link_at(&[Dir::Right, Dir::Left]);
        assert_eq!(link.as_ref().unwrap().value, 12);
        assert!(tree.link_at(&[Dir::Left, Dir::Left, Dir::Left]).is_none());
    }

    #[test]
    fn min_value_at_finds_leftmost_descendant() {
        let tree = sample_tree();
        assert_eq!(tree.min_value_at(&[]), Some(3));
        assert_eq!(tree.min_value_at(&[Dir::Right]), Some(12));
        assert_eq!(Tree::new().min_value_at(&[]), None);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let tree = sample_tree();
        let mut copy = tree.clone();
        copy.attach(6);
        assert!(copy.contains(6));
        assert!(!tree.contains(6));
    }

    #[test]
    fn height_counts_nodes_on_longest_path() {
        assert_eq!(Tree::new().height(), 0);
        assert_eq!(sample_tree().height(), 3);
        let mut chain = Tree::new();
        for value in [1, 2, 3, 4] {
            chain.attach(value);
        }
        assert_eq!(chain.height(), 4);
    }
}
