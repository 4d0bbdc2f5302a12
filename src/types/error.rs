//! Error types for the breadthwise library.

use thiserror::Error;

/// All errors that can occur in the breadthwise library.
///
/// An unsuccessful search is not an error: searches return `None`.
#[derive(Error, Debug)]
pub enum TraverseError {
    /// No vertex carries the given value.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// A vertex handle does not belong to the graph.
    #[error("Vertex ID {0} is out of range")]
    InvalidVertexId(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph or tree document.
    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

impl TraverseError {
    /// Build a `VertexNotFound` from any debuggable vertex value.
    pub fn vertex_not_found(value: &impl std::fmt::Debug) -> Self {
        Self::VertexNotFound(format!("{:?}", value))
    }
}

/// Convenience result type for breadthwise operations.
pub type TraverseResult<T> = Result<T, TraverseError>;
