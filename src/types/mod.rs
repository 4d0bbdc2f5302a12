//! Shared types for the breadthwise library.

pub mod error;
pub mod vertex_id;

pub use error::{TraverseError, TraverseResult};
pub use vertex_id::VertexId;
