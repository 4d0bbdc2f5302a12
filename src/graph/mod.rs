//! In-memory graph operations — the core data structure.

pub mod adjacency_graph;
pub mod builder;
pub mod traversal;

pub use adjacency_graph::{Graph, Vertex};
pub use builder::GraphBuilder;
pub use traversal::{
    bfs_graph, bfs_graph_from, bfs_order, bfs_traverse, dfs_graph, shortest_path, Traversal,
};
