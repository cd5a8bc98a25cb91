//! Checked import from nested adjacency mappings, and export back.

use undirected_graph::{attributes, AdjacencyRow, Graph, GraphError};

// ==================== Helper ====================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

type Rows = Vec<AdjacencyRow<&'static str, i32>>;

/// a -- b labeled 1, b -- c unlabeled, c has a self-loop.
fn sample_rows() -> Rows {
    vec![
        ("a", vec![("b", Some(1))]),
        ("b", vec![("c", None), ("a", Some(1))]),
        ("c", vec![("b", None), ("c", Some(7))]),
    ]
}

// ==================== Import ====================

#[test]
fn test_import_valid_adjacency() {
    init_logging();
    let graph = Graph::from_adjacency(sample_rows()).unwrap();

    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
    assert_eq!(graph.number_of_edges(), 3);
    assert_eq!(graph.get_edge_label(&"b", &"a"), Some(Some(&1)));
    assert_eq!(graph.get_edge_label(&"c", &"b"), Some(None));
    assert_eq!(graph.get_edge_label(&"c", &"c"), Some(Some(&7)));
    assert_eq!(graph.get_degree(&"c"), 2);
}

#[test]
fn test_import_keeps_neighbor_order() {
    let graph = Graph::from_adjacency(sample_rows()).unwrap();
    assert_eq!(graph.neighbors(&"b").copied().collect::<Vec<_>>(), ["c", "a"]);
    assert_eq!(graph.neighbors(&"c").copied().collect::<Vec<_>>(), ["b", "c"]);
}

#[test]
fn test_import_empty() {
    let graph = Graph::from_adjacency(Rows::new()).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn test_import_isolated_nodes() {
    let rows: Rows = vec![("x", vec![]), ("y", vec![])];
    let graph = Graph::from_adjacency(rows).unwrap();
    assert_eq!(graph.number_of_nodes(), 2);
    assert_eq!(graph.number_of_edges(), 0);
}

#[test]
fn test_import_rejects_dangling_neighbor() {
    init_logging();
    let rows: Rows = vec![("a", vec![("z", None)])];

    let err = Graph::from_adjacency(rows).err().unwrap();
    assert_eq!(
        err,
        GraphError::DanglingNeighbor {
            node: "\"a\"".to_string(),
            neighbor: "\"z\"".to_string(),
        }
    );
}

#[test]
fn test_import_rejects_one_way_edge() {
    let rows: Rows = vec![("a", vec![("b", Some(1))]), ("b", vec![])];

    let err = Graph::from_adjacency(rows).err().unwrap();
    assert!(matches!(err, GraphError::AsymmetricEdge { .. }));
    assert_eq!(err.to_string(), "Edge \"a\" -> \"b\" has no reverse entry");
}

#[test]
fn test_import_rejects_label_mismatch() {
    let rows: Rows = vec![("a", vec![("b", Some(1))]), ("b", vec![("a", Some(2))])];

    let err = Graph::from_adjacency(rows).err().unwrap();
    assert!(matches!(err, GraphError::LabelMismatch { .. }));
}

#[test]
fn test_import_rejects_labeled_vs_unlabeled() {
    let rows: Rows = vec![("a", vec![("b", Some(1))]), ("b", vec![("a", None)])];
    assert!(matches!(
        Graph::from_adjacency(rows),
        Err(GraphError::LabelMismatch { .. })
    ));
}

#[test]
fn test_import_rejects_conflicting_duplicate() {
    let rows: Rows = vec![
        ("a", vec![("b", Some(1)), ("b", Some(2))]),
        ("b", vec![("a", Some(1))]),
    ];
    assert!(matches!(
        Graph::from_adjacency(rows),
        Err(GraphError::LabelMismatch { .. })
    ));
}

#[test]
fn test_import_with_attributes() {
    let graph = Graph::from_adjacency_with_attributes(
        sample_rows(),
        vec![("a", attributes([("name", "alpha")]))],
    )
    .unwrap();

    assert_eq!(graph.node_attribute(&"a", "name"), Some(&serde_json::json!("alpha")));
    assert!(graph.node_attributes(&"b").unwrap().is_empty());
}

#[test]
fn test_import_attributes_for_unknown_node() {
    let err = Graph::from_adjacency_with_attributes(
        sample_rows(),
        vec![("q", attributes([("name", "ghost")]))],
    )
    .err()
    .unwrap();

    assert_eq!(err, GraphError::UnknownNode("\"q\"".to_string()));
}

// ==================== Export ====================

#[test]
fn test_export_spells_out_both_directions() {
    let mut graph: Graph<&str, i32> = Graph::new();
    graph.add_edge("a", "b", Some(5));
    graph.add_node("c", Default::default());

    assert_eq!(
        graph.to_adjacency(),
        vec![
            ("a", vec![("b", Some(5))]),
            ("b", vec![("a", Some(5))]),
            ("c", vec![]),
        ]
    );
}

#[test]
fn test_export_then_import_preserves_structure() {
    let original = Graph::from_adjacency(sample_rows()).unwrap();
    let rebuilt = Graph::from_adjacency(original.to_adjacency()).unwrap();

    assert_eq!(rebuilt.to_adjacency(), sample_rows());
    assert_eq!(rebuilt.number_of_edges(), original.number_of_edges());
}
