//! Breadthwise — linked queue, adjacency-list graph and breadth-first search.
//!
//! Trees and graphs are searched for the first node (in breadth-first order)
//! holding a target value. Searches own their queue and visited set and
//! borrow their input immutably; "not found" is `None`, never an error.

pub mod cli;
pub mod format;
pub mod graph;
pub mod queue;
pub mod tree;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{GraphDocument, GraphReader, GraphWriter, TreeReader};
pub use graph::{
    bfs_graph, bfs_graph_from, bfs_order, bfs_traverse, dfs_graph, shortest_path, Graph,
    GraphBuilder, Traversal, Vertex,
};
pub use queue::Queue;
pub use tree::{bfs_tree, dfs_tree, BinaryTree, TreeNode};
pub use types::{TraverseError, TraverseResult, VertexId};
