use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use log::{debug, trace};

use crate::algorithm::{
    threshold, Dijkstra, Kruskal, PathStep, ShortestPathAlgorithm, SpanningForest,
};
use crate::graph::{AdjacencyMap, LabeledGraph};
use crate::io::{read_edge_list, EdgeRecord, ParseOptions};
use crate::{Result, Weight};

/// An undirected graph with non-negative integer weights, built once from an edge list.
///
/// Loading follows three rules:
/// - self-loops are dropped from storage,
/// - a repeated pair keeps the weight of its last occurrence,
/// - every record counts towards [`LabeledGraph::num_edges`] regardless.
///
/// The edge count therefore reports input records rather than stored edges.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    /// Symmetric adjacency: both `u -> v` and `v -> u` are stored
    adjacency: AdjacencyMap,

    /// Records consumed during construction
    edge_count: usize,

    /// Minimum spanning forest, built on the first threshold query
    spanning_forest: OnceLock<SpanningForest>,
}

impl UndirectedGraph {
    /// Creates a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from edge records in order
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeRecord>,
    {
        let mut adjacency = AdjacencyMap::new();
        let mut edge_count = 0usize;
        let mut self_loops = 0usize;
        let mut overwritten = 0usize;

        for record in edges {
            let record: EdgeRecord = record.into();
            edge_count += 1;

            if record.is_self_loop() {
                trace!("dropping self-loop on {:?}", record.u);
                self_loops += 1;
                continue;
            }

            if let Some(previous) = adjacency.insert(&record.u, &record.v, record.weight) {
                trace!(
                    "edge {:?} - {:?} reweighted from {} to {}",
                    record.u,
                    record.v,
                    previous,
                    record.weight
                );
                overwritten += 1;
            }
        }

        debug!(
            "graph loaded: {} nodes, {} records ({} self-loops dropped, {} duplicates overwritten)",
            adjacency.node_count(),
            edge_count,
            self_loops,
            overwritten
        );

        UndirectedGraph {
            adjacency,
            edge_count,
            spanning_forest: OnceLock::new(),
        }
    }

    /// Loads a graph from `u,v,w` lines
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, &ParseOptions::default())
    }

    pub fn from_reader_with_options<R: BufRead>(reader: R, options: &ParseOptions) -> Result<Self> {
        let records = read_edge_list(reader, options)?;
        Ok(Self::from_edges(records))
    }

    /// Loads a graph from an edge-list file
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_csv_path_with_options(path, &ParseOptions::default())
    }

    pub fn from_csv_path_with_options(
        path: impl AsRef<Path>,
        options: &ParseOptions,
    ) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading edge list from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader_with_options(BufReader::new(file), options)
    }

    /// Number of distinct node pairs actually stored
    pub fn num_stored_edges(&self) -> usize {
        self.adjacency.pair_count()
    }

    /// Returns the shortest weighted path from `start` to `end` as
    /// `(from, to, weight)` steps.
    ///
    /// `start == end` yields `[(start, start, 0)]` even for labels not in the
    /// graph. An empty vector means no path exists or a label is unknown.
    /// When several shortest paths exist any one of them may be returned.
    pub fn shortest_path_weighted(&self, start: &str, end: &str) -> Vec<PathStep> {
        if start == end {
            return vec![PathStep::new(start, end, 0)];
        }
        if !self.has_node(start) || !self.has_node(end) {
            trace!("shortest path {:?} -> {:?}: unknown endpoint", start, end);
            return Vec::new();
        }

        let dijkstra = Dijkstra::new();
        let Ok(result) = dijkstra.compute_shortest_paths(self, start) else {
            return Vec::new();
        };
        let path = dijkstra.path_to(&result, end);
        trace!(
            "shortest path {:?} -> {:?}: {} steps",
            start,
            end,
            path.len()
        );
        path
    }

    /// Total weight of the shortest path, `None` if `end` is unreachable
    pub fn shortest_distance(&self, start: &str, end: &str) -> Option<Weight> {
        if start == end {
            return Some(0);
        }
        if !self.has_node(end) {
            return None;
        }
        Dijkstra::new()
            .compute_shortest_paths(self, start)
            .ok()?
            .distance(end)
    }

    /// Minimum spanning forest of the graph, built on first access and reused afterwards
    pub fn minimum_spanning_forest(&self) -> &SpanningForest {
        self.spanning_forest
            .get_or_init(|| Kruskal::new().build(self))
    }

    /// Returns true once the spanning forest has been built
    pub fn is_spanning_forest_built(&self) -> bool {
        self.spanning_forest.get().is_some()
    }

    /// Returns the smallest weight `t` such that `start` and `end` are connected
    /// using only edges of weight `<= t`.
    ///
    /// `start == end` yields `Some(0)` even for labels not in the graph; `None`
    /// means the nodes are in different components or a label is unknown.
    pub fn smallest_connecting_threshold(&self, start: &str, end: &str) -> Option<Weight> {
        if start == end {
            return Some(0);
        }
        let threshold = threshold::bottleneck_between(self.minimum_spanning_forest(), start, end);
        trace!(
            "connecting threshold {:?} -> {:?}: {:?}",
            start,
            end,
            threshold
        );
        threshold
    }

    /// The spanning-forest path whose heaviest edge realises
    /// [`smallest_connecting_threshold`](Self::smallest_connecting_threshold)
    pub fn bottleneck_path(&self, start: &str, end: &str) -> Vec<PathStep> {
        threshold::tree_path(self.minimum_spanning_forest(), start, end)
    }
}

impl LabeledGraph for UndirectedGraph {
    fn num_nodes(&self) -> usize {
        self.adjacency.node_count()
    }

    /// Returns the number of records consumed, including self-loops and duplicates
    fn num_edges(&self) -> usize {
        self.edge_count
    }

    fn has_node(&self, label: &str) -> bool {
        self.adjacency.contains(label)
    }

    fn resolve(&self, label: &str) -> Option<&str> {
        self.adjacency.resolve(label)
    }

    fn labels(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.adjacency.labels())
    }

    fn adjacent(&self, label: &str) -> Box<dyn Iterator<Item = (&str, Weight)> + '_> {
        Box::new(self.adjacency.row(label))
    }

    fn edge_weight(&self, u: &str, v: &str) -> Option<Weight> {
        self.adjacency.weight(u, v)
    }

    fn num_neighbors(&self, label: &str) -> usize {
        self.adjacency.degree(label)
    }
}

impl<E: Into<EdgeRecord>> FromIterator<E> for UndirectedGraph {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}
