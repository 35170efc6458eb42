use std::collections::HashMap;

use log::trace;

use crate::algorithm::traits::NodeState;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::graph::LabeledGraph;
use crate::{Error, Result, Weight};

/// Classic Dijkstra's algorithm implementation over labeled graphs
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths<'g, G>(
        &self,
        graph: &'g G,
        source: &str,
    ) -> Result<ShortestPathResult<'g>>
    where
        G: LabeledGraph + ?Sized,
    {
        let source = graph
            .resolve(source)
            .ok_or_else(|| Error::SourceNotFound(source.to_string()))?;

        // Every node starts unreached; only the source has a known distance
        let mut states: HashMap<&'g str, NodeState<'g>> = graph
            .labels()
            .map(|label| (label, NodeState::default()))
            .collect();
        if let Some(state) = states.get_mut(source) {
            state.distance = Some(0);
        }

        let mut queue: MinQueue<&'g str, Weight> = MinQueue::with_capacity(states.len());
        queue.push(source, 0);

        while let Some((u, dist_u)) = queue.pop() {
            match states.get_mut(u) {
                Some(state) if !state.done => state.done = true,
                _ => continue,
            }

            for (v, weight) in graph.adjacent(u) {
                let candidate = dist_u.saturating_add(weight);
                let Some(next) = states.get_mut(v) else {
                    continue;
                };

                let improves = match next.distance {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improves {
                    next.distance = Some(candidate);
                    next.previous = Some((u, weight));
                    queue.push(v, candidate);
                }
            }
        }

        trace!(
            "{} from {:?}: {} of {} nodes reached",
            self.name(),
            source,
            states.values().filter(|s| s.distance.is_some()).count(),
            states.len()
        );

        Ok(ShortestPathResult::new(source, states))
    }
}
