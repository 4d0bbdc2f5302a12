//! Multi-way tree nodes.

use serde::{Deserialize, Serialize};

/// A tree node owning its children in sibling order.
///
/// Ownership makes the tree acyclic, so traversals need no visited set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode<T> {
    /// Payload compared by searches.
    pub value: T,
    /// Children, left to right.
    #[serde(default = "Vec::new")]
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Create a leaf.
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Create a node with the given children.
    pub fn with_children(value: T, children: Vec<TreeNode<T>>) -> Self {
        Self { value, children }
    }

    /// Append a child after the existing ones.
    pub fn add_child(&mut self, child: TreeNode<T>) -> &mut Self {
        self.children.push(child);
        self
    }

    /// True if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}
