//! JSON documents for graphs and trees.
//!
//! A graph document lists vertex values in insertion order and each
//! undirected edge once, by endpoint value:
//!
//! ```json
//! {"vertices": ["1", "2", "3"], "edges": [["1", "2"], ["1", "3"]]}
//! ```
//!
//! A tree document is a serialized `TreeNode`; `children` may be omitted
//! on leaves.

pub mod reader;
pub mod writer;

use serde::{Deserialize, Serialize};

pub use reader::{GraphReader, TreeReader};
pub use writer::GraphWriter;

/// On-disk shape of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument<T> {
    /// Vertex values in insertion order.
    pub vertices: Vec<T>,
    /// Undirected edges by endpoint value.
    #[serde(default = "Vec::new")]
    pub edges: Vec<(T, T)>,
}
