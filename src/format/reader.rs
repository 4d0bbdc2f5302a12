//! Reads graph and tree documents.

use std::fmt::Debug;
use std::hash::Hash;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::graph::{Graph, GraphBuilder};
use crate::tree::TreeNode;
use crate::types::TraverseResult;

use super::GraphDocument;

/// Reader for JSON graph documents.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph document file into a Graph.
    pub fn read_from_file<T>(path: &Path) -> TraverseResult<Graph<T>>
    where
        T: DeserializeOwned + Eq + Hash + Clone + Debug,
    {
        let file = std::fs::File::open(path)?;
        Self::read_from(&mut std::io::BufReader::new(file))
    }

    /// Read from any reader into a Graph.
    ///
    /// Edges naming an undeclared vertex fail with `VertexNotFound`.
    pub fn read_from<T>(reader: &mut impl Read) -> TraverseResult<Graph<T>>
    where
        T: DeserializeOwned + Eq + Hash + Clone + Debug,
    {
        let document: GraphDocument<T> = serde_json::from_reader(reader)?;
        log::debug!(
            "Read graph document: {} vertices, {} edges",
            document.vertices.len(),
            document.edges.len()
        );
        Self::build(document)
    }

    /// Turn a parsed document into a Graph.
    pub fn build<T>(document: GraphDocument<T>) -> TraverseResult<Graph<T>>
    where
        T: Eq + Hash + Clone + Debug,
    {
        document
            .edges
            .into_iter()
            .fold(
                GraphBuilder::new().vertices(document.vertices),
                |builder, (a, b)| builder.edge(a, b),
            )
            .build()
    }
}

/// Reader for JSON tree documents.
pub struct TreeReader;

impl TreeReader {
    /// Read a tree document file.
    pub fn read_from_file<T: DeserializeOwned>(path: &Path) -> TraverseResult<TreeNode<T>> {
        let file = std::fs::File::open(path)?;
        Self::read_from(&mut std::io::BufReader::new(file))
    }

    /// Read a tree document from any reader.
    pub fn read_from<T: DeserializeOwned>(reader: &mut impl Read) -> TraverseResult<TreeNode<T>> {
        Ok(serde_json::from_reader(reader)?)
    }
}
