//! Graph traversal algorithms (BFS, DFS).

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::queue::Queue;
use crate::types::{TraverseError, TraverseResult, VertexId};

use super::{Graph, Vertex};

/// Result of a breadth-first walk.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Traversal {
    /// Vertices in the order they were dequeued.
    pub order: Vec<VertexId>,
    /// Hop count from the start vertex for every vertex in `order`.
    pub depths: HashMap<VertexId, u32>,
}

/// Breadth-first search from the vertex holding `start` for the first
/// vertex holding `target`.
///
/// Returns `None` if `start` names no vertex or `target` is unreachable.
pub fn bfs_graph<'g, T>(graph: &'g Graph<T>, start: &T, target: &T) -> Option<&'g Vertex<T>>
where
    T: Eq + Hash + Clone + Debug,
{
    let Some(start_id) = graph.vertex_id(start) else {
        log::debug!("bfs_graph: start {:?} is not a vertex", start);
        return None;
    };
    bfs_graph_from(graph, start_id, target)
}

/// Breadth-first search starting at a vertex handle.
///
/// Neighbors are marked visited when they are enqueued, so a vertex reached
/// through several edges is queued once. Every vertex and edge of the start
/// component is examined at most once.
pub fn bfs_graph_from<'g, T: PartialEq>(
    graph: &'g Graph<T>,
    start: VertexId,
    target: &T,
) -> Option<&'g Vertex<T>> {
    let start_vertex = graph.vertex(start)?;

    let mut queue = Queue::new();
    let mut queued_to_visit: HashSet<VertexId> = HashSet::new();
    queue.add(start_vertex);
    queued_to_visit.insert(start);

    while let Some(current) = queue.remove() {
        log::trace!("bfs_graph: visiting {}", current.id());
        if current.value == *target {
            log::debug!(
                "bfs_graph: found {} after marking {} vertices",
                current.id(),
                queued_to_visit.len()
            );
            return Some(current);
        }

        for &neighbor in current.neighbors() {
            if queued_to_visit.insert(neighbor) {
                if let Some(vertex) = graph.vertex(neighbor) {
                    queue.add(vertex);
                }
            }
        }
    }

    log::debug!(
        "bfs_graph: exhausted {} reachable vertices without a match",
        queued_to_visit.len()
    );
    None
}

/// Walk the component of `start` breadth-first, stopping at `max_depth`
/// hops. Pass `u32::MAX` for no limit.
pub fn bfs_traverse<T>(
    graph: &Graph<T>,
    start: VertexId,
    max_depth: u32,
) -> TraverseResult<Traversal> {
    if graph.vertex(start).is_none() {
        return Err(TraverseError::InvalidVertexId(start.index()));
    }

    let mut result = Traversal::default();
    let mut queue: Queue<(VertexId, u32)> = Queue::new();
    result.depths.insert(start, 0);
    queue.add((start, 0));

    while let Some((current, depth)) = queue.remove() {
        result.order.push(current);
        if depth >= max_depth {
            continue;
        }
        for &neighbor in graph.neighbors(current) {
            if let Entry::Vacant(slot) = result.depths.entry(neighbor) {
                slot.insert(depth + 1);
                queue.add((neighbor, depth + 1));
            }
        }
    }

    Ok(result)
}

/// Vertices reachable from `start` in breadth-first order.
///
/// Empty if `start` does not belong to the graph.
pub fn bfs_order<T>(graph: &Graph<T>, start: VertexId) -> Vec<VertexId> {
    bfs_traverse(graph, start, u32::MAX)
        .map(|t| t.order)
        .unwrap_or_default()
}

/// Fewest-hop path between the vertices holding `start` and `target`,
/// both endpoints included.
pub fn shortest_path<T>(graph: &Graph<T>, start: &T, target: &T) -> Option<Vec<VertexId>>
where
    T: Eq + Hash + Clone + Debug,
{
    let start_id = graph.vertex_id(start)?;

    let mut parents: HashMap<VertexId, VertexId> = HashMap::new();
    let mut queue = Queue::new();
    let mut seen: HashSet<VertexId> = HashSet::new();
    queue.add(start_id);
    seen.insert(start_id);

    while let Some(current) = queue.remove() {
        if graph.vertex(current).is_some_and(|v| v.value == *target) {
            let mut path = vec![current];
            let mut cursor = current;
            while let Some(&parent) = parents.get(&cursor) {
                path.push(parent);
                cursor = parent;
            }
            path.reverse();
            return Some(path);
        }

        for &neighbor in graph.neighbors(current) {
            if seen.insert(neighbor) {
                parents.insert(neighbor, current);
                queue.add(neighbor);
            }
        }
    }
    None
}

/// Depth-first search from the vertex holding `start`.
///
/// Neighbors are explored in insertion order; each vertex is expanded once.
pub fn dfs_graph<'g, T>(graph: &'g Graph<T>, start: &T, target: &T) -> Option<&'g Vertex<T>>
where
    T: Eq + Hash + Clone + Debug,
{
    let start_id = graph.vertex_id(start)?;

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut stack = vec![start_id];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        let vertex = graph.vertex(current)?;
        if vertex.value == *target {
            return Some(vertex);
        }
        stack.extend(
            vertex
                .neighbors()
                .iter()
                .rev()
                .filter(|n| !visited.contains(*n)),
        );
    }
    None
}
