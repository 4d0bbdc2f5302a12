//! Writes graph documents.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::TraverseResult;

use super::GraphDocument;

/// Writer for JSON graph documents.
pub struct GraphWriter {
    pretty: bool,
}

impl GraphWriter {
    /// Create a writer; `pretty` selects indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Snapshot a Graph as a document.
    ///
    /// Edges are listed once each, ordered by their lower endpoint. Vertices
    /// sharing a value cannot be told apart in the document.
    pub fn document<T: Clone>(graph: &Graph<T>) -> GraphDocument<T> {
        let vertices = graph.vertices();
        let mut edges = Vec::with_capacity(graph.edge_count());
        for vertex in vertices {
            for &n in vertex.neighbors() {
                if n >= vertex.id() {
                    edges.push((vertex.value.clone(), vertices[n.index()].value.clone()));
                }
            }
        }
        GraphDocument {
            vertices: vertices.iter().map(|v| v.value.clone()).collect(),
            edges,
        }
    }

    /// Write a complete Graph to a document file.
    pub fn write_to_file<T: Clone + Serialize>(
        &self,
        graph: &Graph<T>,
        path: &Path,
    ) -> TraverseResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a complete Graph to any writer.
    pub fn write_to<T: Clone + Serialize>(
        &self,
        graph: &Graph<T>,
        writer: &mut impl Write,
    ) -> TraverseResult<()> {
        let document = Self::document(graph);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &document)?;
        } else {
            serde_json::to_writer(&mut *writer, &document)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
