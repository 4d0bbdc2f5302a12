//! Stable vertex handles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a vertex inside the graph that created it.
///
/// Handles stay valid for the lifetime of the graph; vertices are never
/// removed. A handle from one graph means nothing to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// The raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
