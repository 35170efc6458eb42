mod adjacency;
pub mod generators;
pub mod traits;
pub mod undirected;

pub(crate) use adjacency::AdjacencyMap;
pub use traits::LabeledGraph;
pub use undirected::UndirectedGraph;
