#![allow(dead_code)]

use bottleneck_graph::{LabeledGraph, PathStep, UndirectedGraph, Weight};
use std::collections::{HashMap, HashSet, VecDeque};

pub fn fixture(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

pub fn sorted_labels(graph: &UndirectedGraph) -> Vec<String> {
    let mut labels: Vec<String> = graph.nodes().into_iter().collect();
    labels.sort();
    labels
}

// All-pairs shortest distances by Floyd-Warshall, keyed by (u, v)
pub fn floyd_warshall(graph: &UndirectedGraph) -> HashMap<(String, String), Weight> {
    let labels = sorted_labels(graph);
    let n = labels.len();
    let mut dist: Vec<Vec<Option<Weight>>> = vec![vec![None; n]; n];

    for i in 0..n {
        dist[i][i] = Some(0);
        for j in 0..n {
            if let Some(w) = graph.edge_weight(&labels[i], &labels[j]) {
                dist[i][j] = Some(w);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |current| a + b < current) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }

    let mut out = HashMap::new();
    for i in 0..n {
        for j in 0..n {
            if let Some(d) = dist[i][j] {
                out.insert((labels[i].clone(), labels[j].clone()), d);
            }
        }
    }
    out
}

// Is `end` reachable from `start` using only edges of weight <= limit?
pub fn connected_within(graph: &UndirectedGraph, start: &str, end: &str, limit: Weight) -> bool {
    if !graph.has_node(start) || !graph.has_node(end) {
        return false;
    }
    let mut seen: HashSet<String> = HashSet::from([start.to_string()]);
    let mut queue = VecDeque::from([start.to_string()]);
    while let Some(node) = queue.pop_front() {
        if node == end {
            return true;
        }
        for next in graph.neighbors(&node) {
            let weight = graph.edge_weight(&node, &next).unwrap();
            if weight <= limit && seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    false
}

// Smallest threshold by trying every distinct weight in ascending order
pub fn brute_force_threshold(graph: &UndirectedGraph, start: &str, end: &str) -> Option<Weight> {
    let mut weights: Vec<Weight> = sorted_labels(graph)
        .iter()
        .flat_map(|u| {
            graph
                .neighbors(u)
                .into_iter()
                .map(|v| graph.edge_weight(u, &v).unwrap())
                .collect::<Vec<_>>()
        })
        .collect();
    weights.sort_unstable();
    weights.dedup();
    weights
        .into_iter()
        .find(|&limit| connected_within(graph, start, end, limit))
}

// Checks that `path` is a walk from start to end over existing edges
pub fn assert_valid_path(graph: &UndirectedGraph, path: &[PathStep], start: &str, end: &str) {
    assert!(!path.is_empty(), "path from {start} to {end} should exist");
    assert_eq!(path[0].from, start, "Path should start at source");
    assert_eq!(path[path.len() - 1].to, end, "Path should end at target");
    for pair in path.windows(2) {
        assert_eq!(pair[0].to, pair[1].from, "Path steps should be contiguous");
    }
    for step in path {
        assert_eq!(
            graph.edge_weight(&step.from, &step.to),
            Some(step.weight),
            "Path should only use existing edges"
        );
    }
}

pub fn graph_of(edges: &[(&str, &str, Weight)]) -> UndirectedGraph {
    UndirectedGraph::from_edges(edges.iter().copied())
}
