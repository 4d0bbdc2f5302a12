//! CLI command implementations.

use std::path::Path;

use crate::format::{GraphReader, GraphWriter, TreeReader};
use crate::graph::{bfs_graph, bfs_traverse, dfs_graph, shortest_path, Graph};
use crate::tree::{bfs_tree, dfs_tree, TreeNode};
use crate::types::{TraverseError, TraverseResult};

fn load(path: &Path) -> TraverseResult<Graph<String>> {
    GraphReader::read_from_file(path)
}

fn save(graph: &Graph<String>, path: &Path) -> TraverseResult<()> {
    GraphWriter::new(true).write_to_file(graph, path)
}

fn require_vertex(graph: &Graph<String>, value: &str) -> TraverseResult<()> {
    if graph.contains_vertex(&value.to_string()) {
        Ok(())
    } else {
        Err(TraverseError::vertex_not_found(&value))
    }
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

/// Create a new empty graph document.
pub fn cmd_create(path: &Path) -> TraverseResult<()> {
    save(&Graph::new(), path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Add a vertex. Values already present are left alone.
pub fn cmd_add(path: &Path, value: &str, json: bool) -> TraverseResult<()> {
    let mut graph = load(path)?;
    let value = value.to_string();

    let added = !graph.contains_vertex(&value);
    let id = if added {
        let id = graph.add_vertex(value.clone());
        save(&graph, path)?;
        Some(id)
    } else {
        None
    };

    if json {
        print_json(&serde_json::json!({"value": value, "added": added, "id": id}));
    } else if let Some(id) = id {
        println!("Added vertex {:?} ({}) to {}", value, id, path.display());
    } else {
        println!("Vertex {:?} already exists in {}", value, path.display());
    }
    Ok(())
}

/// Add an undirected edge between two existing vertices.
pub fn cmd_link(path: &Path, a: &str, b: &str, json: bool) -> TraverseResult<()> {
    let mut graph = load(path)?;
    let created = graph.add_edge(&a.to_string(), &b.to_string())?;
    if created {
        save(&graph, path)?;
    }

    if json {
        print_json(&serde_json::json!({"a": a, "b": b, "created": created}));
    } else if created {
        println!("Linked {:?} -- {:?}", a, b);
    } else {
        println!("{:?} and {:?} are already linked", a, b);
    }
    Ok(())
}

/// Display vertex and edge counts.
pub fn cmd_info(path: &Path, json: bool) -> TraverseResult<()> {
    let graph = load(path)?;
    let isolated = graph.vertices().iter().filter(|v| v.degree() == 0).count();
    let max_degree = graph.vertices().iter().map(|v| v.degree()).max().unwrap_or(0);

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "isolated": isolated,
            "max_degree": max_degree,
        }));
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Isolated vertices: {}", isolated);
        println!("Max degree: {}", max_degree);
    }
    Ok(())
}

/// Search the graph from `start` for `target`.
pub fn cmd_find(
    path: &Path,
    start: &str,
    target: &str,
    depth_first: bool,
    json: bool,
) -> TraverseResult<()> {
    let graph = load(path)?;
    require_vertex(&graph, start)?;

    let (start, target) = (start.to_string(), target.to_string());
    let found = if depth_first {
        dfs_graph(&graph, &start, &target)
    } else {
        bfs_graph(&graph, &start, &target)
    };
    let strategy = if depth_first { "dfs" } else { "bfs" };

    if json {
        print_json(&serde_json::json!({
            "start": start,
            "target": target,
            "strategy": strategy,
            "found": found.is_some(),
            "id": found.map(|v| v.id()),
        }));
    } else {
        match found {
            Some(vertex) => println!(
                "Found {:?} ({}) from {:?} via {}",
                vertex.value,
                vertex.id(),
                start,
                strategy
            ),
            None => println!("{:?} is not reachable from {:?}", target, start),
        }
    }
    Ok(())
}

/// List vertices reachable from `start` in breadth-first order.
pub fn cmd_order(path: &Path, start: &str, max_depth: u32, json: bool) -> TraverseResult<()> {
    let graph = load(path)?;
    let start_id = graph
        .vertex_id(&start.to_string())
        .ok_or_else(|| TraverseError::vertex_not_found(&start))?;
    let traversal = bfs_traverse(&graph, start_id, max_depth)?;

    let visits: Vec<(u32, &str)> = traversal
        .order
        .iter()
        .filter_map(|&id| {
            let depth = traversal.depths.get(&id).copied().unwrap_or(0);
            graph.vertex(id).map(|v| (depth, v.value.as_str()))
        })
        .collect();

    if json {
        let items: Vec<serde_json::Value> = visits
            .iter()
            .map(|(depth, value)| serde_json::json!({"value": value, "depth": depth}))
            .collect();
        print_json(&serde_json::Value::Array(items));
    } else {
        for (depth, value) in &visits {
            let indent = "  ".repeat(*depth as usize);
            println!("{}[depth {}] {:?}", indent, depth, value);
        }
        println!("\n{} vertices", visits.len());
    }
    Ok(())
}

/// Print the fewest-hop path between two vertices.
pub fn cmd_path(path: &Path, start: &str, target: &str, json: bool) -> TraverseResult<()> {
    let graph = load(path)?;
    require_vertex(&graph, start)?;
    require_vertex(&graph, target)?;

    let route: Option<Vec<&str>> = shortest_path(&graph, &start.to_string(), &target.to_string())
        .map(|ids| {
            ids.into_iter()
                .filter_map(|id| graph.vertex(id).map(|v| v.value.as_str()))
                .collect()
        });

    if json {
        print_json(&serde_json::json!({
            "start": start,
            "target": target,
            "hops": route.as_ref().map(|r| r.len().saturating_sub(1)),
            "path": route,
        }));
    } else {
        match route {
            Some(route) => {
                println!("{}", route.join(" -> "));
                println!("{} hops", route.len().saturating_sub(1));
            }
            None => println!("No path from {:?} to {:?}", start, target),
        }
    }
    Ok(())
}

/// Search a tree document for `target`.
pub fn cmd_tree(path: &Path, target: &str, depth_first: bool, json: bool) -> TraverseResult<()> {
    let root: TreeNode<String> = TreeReader::read_from_file(path)?;
    let target = target.to_string();

    let found = if depth_first {
        dfs_tree(Some(&root), &target)
    } else {
        bfs_tree(Some(&root), &target)
    };

    if json {
        print_json(&serde_json::json!({
            "target": target,
            "nodes": root.size(),
            "found": found.is_some(),
            "children": found.map(|n| n.children.len()),
        }));
    } else {
        match found {
            Some(node) => println!(
                "Found {:?} with {} children",
                node.value,
                node.children.len()
            ),
            None => println!("{:?} not found among {} nodes", target, root.size()),
        }
    }
    Ok(())
}
