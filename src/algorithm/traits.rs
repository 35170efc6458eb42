use std::collections::HashMap;

use log::warn;

use crate::algorithm::PathStep;
use crate::graph::LabeledGraph;
use crate::{Result, Weight};

/// Per-node bookkeeping of a single-source run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct NodeState<'g> {
    /// Tentative distance; `None` stands for "infinity"
    pub(crate) distance: Option<Weight>,
    /// Previous node on the best known path and the weight of that edge
    pub(crate) previous: Option<(&'g str, Weight)>,
    /// Set once the distance is final
    pub(crate) done: bool,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<'g> {
    source: &'g str,
    states: HashMap<&'g str, NodeState<'g>>,
}

impl<'g> ShortestPathResult<'g> {
    pub(crate) fn new(source: &'g str, states: HashMap<&'g str, NodeState<'g>>) -> Self {
        ShortestPathResult { source, states }
    }

    /// Source node of the run
    pub fn source(&self) -> &'g str {
        self.source
    }

    /// Distance from the source, `None` if unreachable or unknown
    pub fn distance(&self, label: &str) -> Option<Weight> {
        self.states.get(label)?.distance
    }

    /// Previous node on the shortest path to `label` and the weight of that edge
    pub fn predecessor(&self, label: &str) -> Option<(&'g str, Weight)> {
        self.states.get(label)?.previous
    }

    /// Labels reached from the source, the source included
    pub fn reached(&self) -> impl Iterator<Item = &'g str> + '_ {
        self.states
            .iter()
            .filter(|(_, state)| state.distance.is_some())
            .map(|(label, _)| *label)
    }

    /// Number of nodes tracked by the run
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths<'g, G>(
        &self,
        graph: &'g G,
        source: &str,
    ) -> Result<ShortestPathResult<'g>>
    where
        G: LabeledGraph + ?Sized;

    /// Walks predecessor links back from `target` and returns the path from the
    /// source as `(from, to, weight)` steps; empty if `target` was not reached.
    fn path_to(&self, result: &ShortestPathResult<'_>, target: &str) -> Vec<PathStep> {
        let source = result.source();
        if target == source {
            return vec![PathStep::new(source, source, 0)];
        }

        let mut steps = Vec::new();
        let mut current = target;
        while current != source {
            let Some((previous, weight)) = result.predecessor(current) else {
                return Vec::new();
            };
            steps.push(PathStep::new(previous, current, weight));

            // Predecessor links form a tree rooted at the source
            if steps.len() > result.len() {
                warn!(
                    "{}: predecessor chain from {:?} does not reach {:?}",
                    self.name(),
                    target,
                    source
                );
                return Vec::new();
            }
            current = previous;
        }

        steps.reverse();
        steps
    }
}
