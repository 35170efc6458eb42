//! Minimum spanning forest construction with Kruskal's algorithm.
//!
//! Edges are taken in ascending weight order and kept only when they join two
//! different union-find sets, so every connected component of the input ends
//! up with exactly one minimum-weight tree.

use log::debug;

use crate::data_structures::{DisjointSet, MinQueue};
use crate::graph::{AdjacencyMap, LabeledGraph};
use crate::Weight;

/// A minimum spanning forest: one tree per connected component of its source graph
#[derive(Debug, Clone, Default)]
pub struct SpanningForest {
    tree: AdjacencyMap,
    total_weight: Weight,
    components: usize,
}

impl SpanningForest {
    /// Sum of the weights of all tree edges
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Number of trees in the forest
    pub fn num_components(&self) -> usize {
        self.components
    }

    /// Tree edges as `(u, v, weight)` with `u < v`, sorted by weight then labels
    pub fn edges(&self) -> Vec<(&str, &str, Weight)> {
        let mut edges: Vec<_> = self
            .tree
            .labels()
            .flat_map(move |u| {
                self.tree
                    .row(u)
                    .filter(move |(v, _)| u < *v)
                    .map(move |(v, w)| (u, v, w))
            })
            .collect();
        edges.sort_by(|a, b| (a.2, a.0, a.1).cmp(&(b.2, b.0, b.1)));
        edges
    }
}

impl LabeledGraph for SpanningForest {
    fn num_nodes(&self) -> usize {
        self.tree.node_count()
    }

    /// Number of tree edges, each undirected edge counted once
    fn num_edges(&self) -> usize {
        self.tree.pair_count()
    }

    fn has_node(&self, label: &str) -> bool {
        self.tree.contains(label)
    }

    fn resolve(&self, label: &str) -> Option<&str> {
        self.tree.resolve(label)
    }

    fn labels(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.tree.labels())
    }

    fn adjacent(&self, label: &str) -> Box<dyn Iterator<Item = (&str, Weight)> + '_> {
        Box::new(self.tree.row(label))
    }

    fn edge_weight(&self, u: &str, v: &str) -> Option<Weight> {
        self.tree.weight(u, v)
    }

    fn num_neighbors(&self, label: &str) -> usize {
        self.tree.degree(label)
    }
}

/// Kruskal's minimum spanning forest algorithm
#[derive(Debug, Default)]
pub struct Kruskal;

impl Kruskal {
    pub fn new() -> Self {
        Kruskal
    }

    pub fn name(&self) -> &'static str {
        "Kruskal"
    }

    /// Builds the minimum spanning forest of `graph`.
    ///
    /// Each undirected edge is stored twice in the adjacency, so only the
    /// direction with the smaller label first is queued. Equal weights are
    /// processed in label order, which makes the chosen forest deterministic.
    pub fn build<G>(&self, graph: &G) -> SpanningForest
    where
        G: LabeledGraph + ?Sized,
    {
        let mut sets = DisjointSet::new(graph.labels());
        let mut queue: MinQueue<(&str, &str), Weight> = graph
            .labels()
            .flat_map(move |u| {
                graph
                    .adjacent(u)
                    .filter(move |(v, _)| u < *v)
                    .map(move |(v, w)| ((u, v), w))
            })
            .collect();
        let candidates = queue.len();

        let mut forest = SpanningForest::default();
        while let Some(((u, v), weight)) = queue.pop() {
            if sets.num_sets() <= 1 {
                break;
            }
            // Joining two nodes already in the same set would close a cycle
            if !sets.union(u, v) {
                continue;
            }
            forest.tree.insert(u, v, weight);
            forest.total_weight = forest.total_weight.saturating_add(weight);
        }
        forest.components = sets.num_sets();

        debug!(
            "{}: kept {} of {} edges, {} components, total weight {}",
            self.name(),
            forest.num_edges(),
            candidates,
            forest.components,
            forest.total_weight
        );
        forest
    }
}
