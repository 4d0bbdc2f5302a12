//! Tree search algorithms (BFS, DFS).

use crate::queue::Queue;

use super::TreeNode;

/// Breadth-first search from `root` for the first node whose value equals
/// `target`.
///
/// Nodes are visited level by level, siblings left to right, so the result
/// is the shallowest match and the leftmost among equally shallow ones.
/// Returns `None` when nothing matches or `root` is `None`.
pub fn bfs_tree<'t, T: PartialEq>(
    root: Option<&'t TreeNode<T>>,
    target: &T,
) -> Option<&'t TreeNode<T>> {
    let mut queue = Queue::new();
    queue.add(root?);

    let mut examined = 0usize;
    while let Some(node) = queue.remove() {
        examined += 1;
        if node.value == *target {
            log::debug!("bfs_tree: match after {} nodes", examined);
            return Some(node);
        }
        for child in &node.children {
            queue.add(child);
        }
    }

    log::debug!("bfs_tree: no match in {} nodes", examined);
    None
}

/// Depth-first (pre-order) search from `root`.
///
/// A node is checked before its children, and a child's whole subtree is
/// exhausted before its next sibling is entered.
pub fn dfs_tree<'t, T: PartialEq>(
    root: Option<&'t TreeNode<T>>,
    target: &T,
) -> Option<&'t TreeNode<T>> {
    let mut stack = vec![root?];

    while let Some(node) = stack.pop() {
        if node.value == *target {
            return Some(node);
        }
        stack.extend(node.children.iter().rev());
    }
    None
}
