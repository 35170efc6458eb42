use std::collections::HashMap;

use crate::Weight;

/// Symmetric label -> (neighbor label -> weight) storage shared by the input
/// graph and its spanning forest
#[derive(Debug, Clone, Default)]
pub(crate) struct AdjacencyMap {
    rows: HashMap<String, HashMap<String, Weight>>,
}

impl AdjacencyMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Stores `u <-> v` in both rows and returns the weight it replaced, if any.
    /// Callers are responsible for rejecting self-loops.
    pub(crate) fn insert(&mut self, u: &str, v: &str, weight: Weight) -> Option<Weight> {
        let previous = self
            .rows
            .entry(u.to_string())
            .or_default()
            .insert(v.to_string(), weight);
        self.rows
            .entry(v.to_string())
            .or_default()
            .insert(u.to_string(), weight);
        previous
    }

    pub(crate) fn node_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of distinct undirected pairs stored
    pub(crate) fn pair_count(&self) -> usize {
        self.rows.values().map(HashMap::len).sum::<usize>() / 2
    }

    pub(crate) fn contains(&self, label: &str) -> bool {
        self.rows.contains_key(label)
    }

    /// The stored copy of `label`, borrowed for as long as the map lives
    pub(crate) fn resolve(&self, label: &str) -> Option<&str> {
        self.rows.get_key_value(label).map(|(key, _)| key.as_str())
    }

    pub(crate) fn weight(&self, u: &str, v: &str) -> Option<Weight> {
        self.rows.get(u)?.get(v).copied()
    }

    pub(crate) fn degree(&self, label: &str) -> usize {
        self.rows.get(label).map_or(0, HashMap::len)
    }

    pub(crate) fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.keys().map(String::as_str)
    }

    pub(crate) fn row(&self, label: &str) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.rows
            .get(label)
            .into_iter()
            .flat_map(|row| row.iter().map(|(v, w)| (v.as_str(), *w)))
    }
}
