//! Queue, graph and tree data structure tests.

use breadthwise::graph::{Graph, GraphBuilder};
use breadthwise::queue::Queue;
use breadthwise::tree::{BinaryTree, TreeNode};
use breadthwise::types::TraverseError;

// ==================== Queue Tests ====================

#[test]
fn test_queue_new_is_empty() {
    let mut queue: Queue<i32> = Queue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.remove(), None);
}

#[test]
fn test_queue_add_then_remove_resets() {
    let mut queue = Queue::new();
    queue.add("x");
    assert!(!queue.is_empty());
    assert_eq!(queue.remove(), Some("x"));
    assert!(queue.is_empty());
    assert_eq!(queue.remove(), None);
}

#[test]
fn test_queue_fifo_order() {
    let mut queue = Queue::new();
    for i in 0..5 {
        queue.add(i);
    }
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.peek(), Some(&0));

    let drained: Vec<i32> = std::iter::from_fn(|| queue.remove()).collect();
    assert_eq!(drained, vec![0, 1, 2, 3, 4]);
    assert!(queue.is_empty());
}

#[test]
fn test_queue_add_after_draining() {
    // Draining to empty must clear the back link, or this add would be lost.
    let mut queue = Queue::new();
    queue.add(1);
    queue.add(2);
    assert_eq!(queue.remove(), Some(1));
    assert_eq!(queue.remove(), Some(2));

    queue.add(3);
    assert_eq!(queue.peek(), Some(&3));
    assert_eq!(queue.remove(), Some(3));
    assert_eq!(queue.remove(), None);
}

#[test]
fn test_queue_interleaved_reuses_slots() {
    let mut queue = Queue::new();
    let mut expected = std::collections::VecDeque::new();
    for round in 0..100 {
        queue.add(round);
        expected.push_back(round);
        if round % 3 == 0 {
            assert_eq!(queue.remove(), expected.pop_front());
        }
    }
    assert_eq!(queue.len(), expected.len());
    let rest: Vec<i32> = queue.into_iter().collect();
    assert_eq!(rest, Vec::from(expected));
}

#[test]
fn test_queue_from_iter_and_clear() {
    let mut queue: Queue<char> = "abc".chars().collect();
    assert_eq!(queue.len(), 3);
    queue.extend(['d']);
    assert_eq!(queue.remove(), Some('a'));
    queue.clear();
    assert!(queue.is_empty());
    queue.add('z');
    assert_eq!(queue.remove(), Some('z'));
}

// ==================== Graph Tests ====================

#[test]
fn test_add_vertex_and_lookup() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.get_vertex(&"a").map(|v| v.id()), Some(a));
    assert_eq!(graph.vertex_id(&"b"), Some(b));
    assert!(graph.get_vertex(&"c").is_none());
    assert!(graph.vertex(a).unwrap().neighbors().is_empty());
}

#[test]
fn test_add_edge_is_symmetric() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(1);
    let b = graph.add_vertex(2);

    assert!(graph.add_edge(&1, &2).unwrap());
    assert_eq!(graph.neighbors(a), &[b]);
    assert_eq!(graph.neighbors(b), &[a]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_duplicate_edge_ignored() {
    let mut graph = Graph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);

    assert!(graph.add_edge(&1, &2).unwrap());
    assert!(!graph.add_edge(&2, &1).unwrap());
    assert!(!graph.add_edge(&1, &2).unwrap());

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_vertex(&1).unwrap().degree(), 1);
    assert_eq!(graph.get_vertex(&2).unwrap().degree(), 1);
}

#[test]
fn test_self_loop_stored_once() {
    let mut graph = Graph::new();
    let a = graph.add_vertex('a');
    assert!(graph.add_edge(&'a', &'a').unwrap());
    assert_eq!(graph.neighbors(a), &[a]);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(a, a)]);
}

#[test]
fn test_add_edge_missing_vertex() {
    let mut graph = Graph::new();
    graph.add_vertex("present".to_string());

    let result = graph.add_edge(&"present".to_string(), &"missing".to_string());
    match result {
        Err(TraverseError::VertexNotFound(value)) => assert!(value.contains("missing")),
        other => panic!("Expected VertexNotFound, got {:?}", other),
    }
    // Nothing was linked.
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.get_vertex(&"present".to_string()).unwrap().degree(), 0);
}

#[test]
fn test_add_edge_by_id_out_of_range() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(0u8);
    let mut other = Graph::new();
    other.add_vertex(0u8);
    let foreign = other.add_vertex(1u8);

    match graph.add_edge_by_id(a, foreign) {
        Err(TraverseError::InvalidVertexId(idx)) => assert_eq!(idx, 1),
        other => panic!("Expected InvalidVertexId, got {:?}", other),
    }
}

#[test]
fn test_duplicate_values_resolve_to_first() {
    let mut graph = Graph::new();
    let first = graph.add_vertex("dup");
    let second = graph.add_vertex("dup");
    let other = graph.add_vertex("other");

    assert_ne!(first, second);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.vertex_id(&"dup"), Some(first));

    graph.add_edge(&"dup", &"other").unwrap();
    assert_eq!(graph.neighbors(first), &[other]);
    assert!(graph.neighbors(second).is_empty());

    // The handle API reaches the shadowed vertex.
    graph.add_edge_by_id(second, other).unwrap();
    assert_eq!(graph.neighbors(other), &[first, second]);
}

#[test]
fn test_edges_listed_once() {
    let graph = GraphBuilder::new()
        .vertices(1..=4)
        .edge(1, 2)
        .edge(1, 3)
        .edge(3, 4)
        .build()
        .unwrap();

    let edges: Vec<(usize, usize)> = graph
        .edges()
        .map(|(a, b)| (a.index(), b.index()))
        .collect();
    assert_eq!(edges, vec![(0, 1), (0, 2), (2, 3)]);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_builder_rejects_unknown_endpoint() {
    let result = GraphBuilder::new().vertex("a").edge("a", "b").build();
    assert!(matches!(result, Err(TraverseError::VertexNotFound(_))));
}

// ==================== Tree Tests ====================

#[test]
fn test_tree_node_construction() {
    let mut root = TreeNode::new(1);
    root.add_child(TreeNode::new(2)).add_child(TreeNode::new(3));
    root.children[0].add_child(TreeNode::new(4));

    assert_eq!(root.children.len(), 2);
    assert!(!root.is_leaf());
    assert!(root.children[1].is_leaf());
    assert_eq!(root.size(), 4);
}

#[test]
fn test_tree_node_with_children() {
    let root = TreeNode::with_children("r", vec![TreeNode::new("a"), TreeNode::new("b")]);
    let values: Vec<&str> = root.children.iter().map(|c| c.value).collect();
    assert_eq!(values, vec!["a", "b"]);
}

#[test]
fn test_binary_tree_links() {
    let mut root = BinaryTree::new(1);
    root.set_left(BinaryTree::new(2)).set_right(BinaryTree::new(3));
    assert_eq!(root.left.as_ref().map(|n| n.value), Some(2));
    assert_eq!(root.right.as_ref().map(|n| n.value), Some(3));
}
