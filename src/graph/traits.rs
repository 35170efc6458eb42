use std::collections::HashSet;
use std::fmt::Debug;

use crate::Weight;

/// Trait representing an undirected graph whose nodes are identified by string labels.
///
/// Lookups never fail on unknown labels: they answer with `0`, an empty set or `None`.
pub trait LabeledGraph: Debug {
    /// Returns the number of distinct labels in the graph
    fn num_nodes(&self) -> usize;

    /// Returns the number of edges in the graph
    fn num_edges(&self) -> usize;

    /// Returns true if the label is a node of the graph
    fn has_node(&self, label: &str) -> bool;

    /// Returns the graph's own copy of `label`, if present
    fn resolve(&self, label: &str) -> Option<&str>;

    /// Returns an iterator over every node label
    fn labels(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns an iterator over `(neighbor, weight)` pairs of a node
    fn adjacent(&self, label: &str) -> Box<dyn Iterator<Item = (&str, Weight)> + '_>;

    /// Gets the weight of the edge between two nodes if it exists
    fn edge_weight(&self, u: &str, v: &str) -> Option<Weight>;

    /// Returns the number of neighbors of a node, 0 for unknown labels
    fn num_neighbors(&self, label: &str) -> usize {
        self.adjacent(label).count()
    }

    /// Returns the set of all node labels
    fn nodes(&self) -> HashSet<String> {
        self.labels().map(str::to_string).collect()
    }

    /// Returns the labels adjacent to a node; empty for unknown labels
    fn neighbors(&self, label: &str) -> HashSet<String> {
        self.adjacent(label).map(|(v, _)| v.to_string()).collect()
    }
}
