//! Binary tree with left/right links.

use serde::{Deserialize, Serialize};

use crate::queue::Queue;

/// A binary tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryTree<T> {
    /// Payload compared by searches.
    pub value: T,
    /// Left subtree.
    #[serde(default)]
    pub left: Option<Box<BinaryTree<T>>>,
    /// Right subtree.
    #[serde(default)]
    pub right: Option<Box<BinaryTree<T>>>,
}

impl<T> BinaryTree<T> {
    /// Create a leaf.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Replace the left subtree.
    pub fn set_left(&mut self, node: BinaryTree<T>) -> &mut Self {
        self.left = Some(Box::new(node));
        self
    }

    /// Replace the right subtree.
    pub fn set_right(&mut self, node: BinaryTree<T>) -> &mut Self {
        self.right = Some(Box::new(node));
        self
    }

    fn children(&self) -> impl Iterator<Item = &BinaryTree<T>> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}

impl<T: PartialEq> BinaryTree<T> {
    /// Pre-order search: this node, then the left subtree, then the right.
    pub fn depth_first_search(&self, target: &T) -> Option<&BinaryTree<T>> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.value == *target {
                return Some(node);
            }
            // Right goes in first so left is popped first.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        None
    }

    /// Level-order search, left before right.
    pub fn breadth_first_search(&self, target: &T) -> Option<&BinaryTree<T>> {
        let mut queue = Queue::new();
        queue.add(self);
        while let Some(node) = queue.remove() {
            if node.value == *target {
                return Some(node);
            }
            queue.extend(node.children());
        }
        None
    }
}
