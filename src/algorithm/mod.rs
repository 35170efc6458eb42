pub mod dijkstra;
pub mod kruskal;
pub mod threshold;
pub mod traits;

use serde::Serialize;

use crate::Weight;

pub use dijkstra::Dijkstra;
pub use kruskal::{Kruskal, SpanningForest};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};

/// One edge of a path, traversed from `from` to `to`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PathStep {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl PathStep {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: Weight) -> Self {
        PathStep {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl<S: Into<String>> From<(S, S, Weight)> for PathStep {
    fn from((from, to, weight): (S, S, Weight)) -> Self {
        PathStep::new(from, to, weight)
    }
}

/// Sum of the step weights of a path
pub fn path_weight(path: &[PathStep]) -> Weight {
    path.iter().map(|step| step.weight).sum()
}
