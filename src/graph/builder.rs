//! Fluent API for building Graph instances.

use std::fmt::Debug;
use std::hash::Hash;

use crate::types::TraverseResult;

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Edges are resolved when `build` runs, so they may name vertices that are
/// added later in the chain.
pub struct GraphBuilder<T> {
    vertices: Vec<T>,
    edges: Vec<(T, T)>,
}

impl<T: Eq + Hash + Clone + Debug> GraphBuilder<T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(mut self, value: T) -> Self {
        self.vertices.push(value);
        self
    }

    /// Add several vertices in order.
    pub fn vertices(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.vertices.extend(values);
        self
    }

    /// Add an undirected edge between two vertex values.
    pub fn edge(mut self, a: T, b: T) -> Self {
        self.edges.push((a, b));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> TraverseResult<Graph<T>> {
        let mut graph = Graph::new();
        for value in self.vertices {
            graph.add_vertex(value);
        }
        for (a, b) in &self.edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }
}

impl<T: Eq + Hash + Clone + Debug> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
