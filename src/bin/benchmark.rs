use std::time::{Duration, Instant};

use bottleneck_graph::graph::generators::{node_label, random_connected};
use bottleneck_graph::{LabeledGraph, UndirectedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const QUERIES_PER_SIZE: usize = 20;

// Function to time a batch of queries between random node pairs
fn time_queries<F>(pairs: &[(String, String)], mut query: F) -> Duration
where
    F: FnMut(&str, &str),
{
    let start = Instant::now();
    for (u, v) in pairs {
        query(u, v);
    }
    start.elapsed()
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];

    // Edge factor: chords added per node on top of the spanning tree
    let edge_factor = 2;

    println!("=====================================================");
    println!("Benchmark: shortest path vs connecting threshold");
    println!("Edge factor: {} extra edges per node", edge_factor);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = UndirectedGraph::from_edges(random_connected(
            &mut rng,
            size,
            size * edge_factor,
            1_000,
        ));
        println!(
            "Graph has {} nodes and {} edges",
            graph.num_nodes(),
            graph.num_stored_edges()
        );

        let pairs: Vec<(String, String)> = (0..QUERIES_PER_SIZE)
            .map(|_| {
                (
                    node_label("n", rng.gen_range(0..size)),
                    node_label("n", rng.gen_range(0..size)),
                )
            })
            .collect();

        let path_time = time_queries(&pairs, |u, v| {
            graph.shortest_path_weighted(u, v);
        });

        let build_start = Instant::now();
        let forest = graph.minimum_spanning_forest();
        let build_time = build_start.elapsed();
        println!(
            "  - Spanning forest: {} edges, weight {}, built in {:?}",
            forest.num_edges(),
            forest.total_weight(),
            build_time
        );

        let threshold_time = time_queries(&pairs, |u, v| {
            graph.smallest_connecting_threshold(u, v);
        });

        println!(
            "  - {} shortest paths in {:?}, {} thresholds in {:?}",
            QUERIES_PER_SIZE, path_time, QUERIES_PER_SIZE, threshold_time
        );
        results.push((size, path_time, build_time, threshold_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15}",
        "Nodes", "Paths (ms)", "MST build (ms)", "Thresholds (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, path_time, build_time, threshold_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15}",
            size,
            path_time.as_millis(),
            build_time.as_millis(),
            threshold_time.as_millis()
        );
    }
}
