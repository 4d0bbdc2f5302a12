//! Rooted trees and their searches.

pub mod binary;
pub mod node;
pub mod traversal;

pub use binary::BinaryTree;
pub use node::TreeNode;
pub use traversal::{bfs_tree, dfs_tree};
