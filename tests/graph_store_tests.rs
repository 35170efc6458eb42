mod common;

use bottleneck_graph::io::{read_edge_list, ParseOptions};
use bottleneck_graph::{EdgeRecord, Error, LabeledGraph, UndirectedGraph};
use common::{fixture, graph_of};
use std::collections::HashSet;

fn labels(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_small_fixture_counts() {
    let graph = UndirectedGraph::from_csv_path(fixture("small.csv")).unwrap();

    assert_eq!(graph.nodes(), labels(&["A", "B", "C", "D", "E", "F", "G"]));
    assert_eq!(graph.num_nodes(), 7);
    assert_eq!(graph.num_edges(), 6);
    assert_eq!(graph.num_stored_edges(), 6);
}

#[test]
fn test_edge_weight_lookup() {
    let graph = UndirectedGraph::from_csv_path(fixture("small.csv")).unwrap();

    assert_eq!(graph.edge_weight("A", "B"), Some(1));
    assert_eq!(graph.edge_weight("A", "F"), None); // edge does not exist
    assert_eq!(graph.edge_weight("A", "Z"), None); // node does not exist
    assert_eq!(graph.edge_weight("Z", "A"), None);
}

#[test]
fn test_edges_are_symmetric() {
    let edges = [("A", "B", 3), ("B", "C", 0), ("D", "A", 7)];
    let graph = graph_of(&edges);

    for (u, v, w) in edges {
        assert_eq!(graph.edge_weight(u, v), Some(w));
        assert_eq!(graph.edge_weight(v, u), Some(w));
    }
}

#[test]
fn test_neighbors_match_neighbor_counts() {
    let graph = UndirectedGraph::from_csv_path(fixture("small.csv")).unwrap();

    assert_eq!(graph.neighbors("C"), labels(&["A", "B", "D"]));
    assert_eq!(graph.neighbors("G"), labels(&["F"]));

    for label in ["A", "B", "C", "D", "E", "F", "G", "missing"] {
        assert_eq!(graph.neighbors(label).len(), graph.num_neighbors(label));
    }
    assert_eq!(graph.num_neighbors("missing"), 0);
    assert!(graph.neighbors("missing").is_empty());
}

#[test]
fn test_self_loops_counted_but_not_stored() {
    let graph = graph_of(&[("A", "A", 4), ("A", "B", 1), ("C", "C", 2)]);

    assert_eq!(graph.num_edges(), 3);
    assert_eq!(graph.num_stored_edges(), 1);
    assert_eq!(graph.num_nodes(), 2);
    assert!(!graph.has_node("C"));
    assert_eq!(graph.edge_weight("A", "A"), None);
}

#[test]
fn test_duplicate_edges_last_weight_wins() {
    let graph = graph_of(&[("A", "B", 9), ("B", "A", 2), ("A", "B", 5)]);

    assert_eq!(graph.num_edges(), 3);
    assert_eq!(graph.num_stored_edges(), 1);
    assert_eq!(graph.edge_weight("A", "B"), Some(5));
    assert_eq!(graph.edge_weight("B", "A"), Some(5));
    assert_eq!(graph.num_neighbors("A"), 1);
}

#[test]
fn test_empty_graph() {
    let graph = UndirectedGraph::from_csv_path(fixture("empty.csv")).unwrap();

    assert!(graph.nodes().is_empty());
    assert_eq!(graph.num_nodes(), 0);
    assert_eq!(graph.num_edges(), 0);
    assert_eq!(graph.edge_weight("A", "B"), None);
    assert_eq!(UndirectedGraph::new().num_nodes(), 0);
}

#[test]
fn test_collect_from_records() {
    let graph: UndirectedGraph = vec![EdgeRecord::new("x", "y", 2), EdgeRecord::new("y", "z", 3)]
        .into_iter()
        .collect();
    assert_eq!(graph.num_nodes(), 3);
    assert_eq!(graph.edge_weight("z", "y"), Some(3));
}

#[test]
fn test_malformed_input_aborts_construction() {
    let options = ParseOptions::new().with_comment_prefix("#");
    let err = UndirectedGraph::from_csv_path_with_options(fixture("malformed.csv"), &options)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { line: 6, .. }), "{err}");

    // Without comment handling the header row has the wrong weight
    let err = UndirectedGraph::from_csv_path(fixture("malformed.csv")).unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { line: 1, .. }), "{err}");
}

#[test]
fn test_parse_errors_are_distinct() {
    let err = UndirectedGraph::from_reader("A,B\n".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::FieldCount { line: 1, found: 2 }));

    let err = UndirectedGraph::from_reader("A,B,1\nB,C,-2\n".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::NegativeWeight { line: 2, value: -2 }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = UndirectedGraph::from_csv_path(fixture("does_not_exist.csv")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_blank_and_comment_lines_not_counted() {
    let input = "# header\nA,B,1\n\nB,C,2\n";
    let options = ParseOptions::new().with_comment_prefix("#");
    let records = read_edge_list(input.as_bytes(), &options).unwrap();
    assert_eq!(records.len(), 2);

    let graph = UndirectedGraph::from_reader_with_options(input.as_bytes(), &options).unwrap();
    assert_eq!(graph.num_edges(), 2);
}
