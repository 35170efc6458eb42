//! Bottleneck Graph - shortest weighted paths and minimum bottleneck thresholds
//!
//! This library loads an undirected, non-negatively weighted graph from an edge
//! list of `u,v,w` records and answers two kinds of queries over it:
//!
//! - the shortest weighted path between two nodes (Dijkstra's algorithm), and
//! - the smallest edge-weight threshold that still connects two nodes, read off
//!   the unique connecting path in a minimum spanning forest (Kruskal's algorithm).
//!
//! The spanning forest is built on first use and cached for the lifetime of the graph.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{
    dijkstra::Dijkstra, kruskal::Kruskal, path_weight, PathStep, ShortestPathAlgorithm,
    ShortestPathResult, SpanningForest,
};
/// Re-export main types for convenient use
pub use graph::{LabeledGraph, UndirectedGraph};
pub use io::{EdgeRecord, ParseOptions};

/// Edge weight. Negative weights are rejected when an edge list is loaded.
pub type Weight = u64;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 3 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: empty node label")]
    EmptyLabel { line: usize },

    #[error("line {line}: invalid weight {value:?}")]
    InvalidWeight { line: usize, value: String },

    #[error("line {line}: negative edge weight {value}")]
    NegativeWeight { line: usize, value: i64 },

    #[error("Source node not found in graph: {0}")]
    SourceNotFound(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
