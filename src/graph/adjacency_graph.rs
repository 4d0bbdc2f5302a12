//! Core graph structure — vertices with symmetric adjacency.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{TraverseError, TraverseResult, VertexId};

/// A vertex and the handles of its neighbors.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    id: VertexId,
    /// Payload compared by searches.
    pub value: T,
    /// Neighbor handles in insertion order, never duplicated.
    neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    /// Handle of this vertex in its graph.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Neighbor handles in the order the edges were added.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// Number of distinct neighbors.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Undirected graph owning its vertices.
///
/// Vertex values are expected to be unique. Duplicates are accepted, but
/// every value-based lookup resolves to the vertex inserted first; use the
/// `VertexId` returned by `add_vertex` to address the others.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// All vertices, indexed by `VertexId`.
    vertices: Vec<Vertex<T>>,
    /// Value -> first vertex inserted with that value.
    index: HashMap<T, VertexId>,
    /// Distinct undirected edges, self-loops included.
    edge_count: usize,
}

impl<T> Graph<T> {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// Get a vertex by handle.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    /// Neighbor handles of `id`; empty for an unknown handle.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.vertex(id).map(Vertex::neighbors).unwrap_or(&[])
    }

    /// Link two vertices by handle.
    ///
    /// Returns `Ok(false)` if they were already adjacent.
    pub fn add_edge_by_id(&mut self, a: VertexId, b: VertexId) -> TraverseResult<bool> {
        for id in [a, b] {
            if id.0 >= self.vertices.len() {
                return Err(TraverseError::InvalidVertexId(id.0));
            }
        }

        if self.vertices[a.0].neighbors.contains(&b) {
            return Ok(false);
        }

        self.vertices[a.0].neighbors.push(b);
        if a != b {
            self.vertices[b.0].neighbors.push(a);
        }
        self.edge_count += 1;
        Ok(true)
    }
}

impl<T: Eq + Hash + Clone + Debug> Graph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Append a vertex with no neighbors and return its handle.
    ///
    /// Values are not checked for uniqueness.
    pub fn add_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        let first = *self.index.entry(value.clone()).or_insert(id);
        if first != id {
            log::warn!(
                "Duplicate vertex value {:?}: lookups resolve to {}, not {}",
                value,
                first,
                id
            );
        }
        self.vertices.push(Vertex {
            id,
            value,
            neighbors: Vec::new(),
        });
        id
    }

    /// Link the vertices holding `a` and `b` in both directions.
    ///
    /// Fails with `VertexNotFound` naming the missing value, leaving the
    /// graph untouched. Returns `Ok(false)` if the edge already existed.
    pub fn add_edge(&mut self, a: &T, b: &T) -> TraverseResult<bool> {
        let a_id = self
            .vertex_id(a)
            .ok_or_else(|| TraverseError::vertex_not_found(a))?;
        let b_id = self
            .vertex_id(b)
            .ok_or_else(|| TraverseError::vertex_not_found(b))?;
        self.add_edge_by_id(a_id, b_id)
    }

    /// Get the first vertex holding `value`.
    pub fn get_vertex(&self, value: &T) -> Option<&Vertex<T>> {
        self.vertex_id(value).and_then(|id| self.vertex(id))
    }

    /// Handle of the first vertex holding `value`.
    pub fn vertex_id(&self, value: &T) -> Option<VertexId> {
        self.index.get(value).copied()
    }

    /// True if some vertex holds `value`.
    pub fn contains_vertex(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Iterate each undirected edge once as `(lower, higher)` handles.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices.iter().flat_map(|v| {
            v.neighbors
                .iter()
                .filter(move |&&n| n >= v.id)
                .map(move |&n| (v.id, n))
        })
    }
}

impl<T: Eq + Hash + Clone + Debug> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
