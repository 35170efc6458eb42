use bottleneck_graph::{path_weight, LabeledGraph, UndirectedGraph};
use serde_json::json;
use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage: graph_query <edges.csv> <command> [args] [--json]

commands:
  stats                 node and edge counts
  nodes                 all node labels
  neighbors <NODE>      labels adjacent to NODE
  weight <U> <V>        weight of the edge U - V
  path <START> <END>    shortest weighted path
  threshold <START> <END>
                        smallest weight connecting START and END
  forest                edges of the minimum spanning forest";

/// Command to run against the loaded graph
#[derive(Debug, Clone, PartialEq, Eq)]
enum Query {
    Stats,
    Nodes,
    Neighbors(String),
    Weight(String, String),
    Path(String, String),
    Threshold(String, String),
    Forest,
}

/// Configuration for the query harness
#[derive(Debug, Clone)]
struct HarnessConfig {
    edge_list: String,
    query: Query,
    json: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            edge_list: String::new(),
            query: Query::Stats,
            json: false,
        }
    }
}

impl HarnessConfig {
    fn from_args(args: &[String]) -> Option<Self> {
        let mut config = HarnessConfig::default();
        let mut positional: Vec<&str> = Vec::new();
        for arg in args {
            if arg == "--json" {
                config.json = true;
            } else {
                positional.push(arg);
            }
        }

        let (&path, rest) = positional.split_first()?;
        config.edge_list = path.to_string();
        config.query = match rest {
            [] | ["stats"] => Query::Stats,
            ["nodes"] => Query::Nodes,
            ["neighbors", node] => Query::Neighbors(node.to_string()),
            ["weight", u, v] => Query::Weight(u.to_string(), v.to_string()),
            ["path", s, e] => Query::Path(s.to_string(), e.to_string()),
            ["threshold", s, e] => Query::Threshold(s.to_string(), e.to_string()),
            ["forest"] => Query::Forest,
            _ => return None,
        };
        Some(config)
    }
}

fn sorted(labels: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut labels: Vec<String> = labels.into_iter().collect();
    labels.sort();
    labels
}

fn run(graph: &UndirectedGraph, config: &HarnessConfig) {
    match &config.query {
        Query::Stats => {
            let forest = graph.minimum_spanning_forest();
            if config.json {
                println!(
                    "{}",
                    json!({
                        "nodes": graph.num_nodes(),
                        "edges": graph.num_edges(),
                        "stored_edges": graph.num_stored_edges(),
                        "components": forest.num_components(),
                        "forest_weight": forest.total_weight(),
                    })
                );
            } else {
                println!("nodes:         {}", graph.num_nodes());
                println!("edges:         {}", graph.num_edges());
                println!("stored edges:  {}", graph.num_stored_edges());
                println!("components:    {}", forest.num_components());
                println!("forest weight: {}", forest.total_weight());
            }
        }
        Query::Nodes => {
            let nodes = sorted(graph.nodes());
            if config.json {
                println!("{}", json!(nodes));
            } else {
                for node in nodes {
                    println!("{node}");
                }
            }
        }
        Query::Neighbors(node) => {
            let neighbors = sorted(graph.neighbors(node));
            if config.json {
                println!("{}", json!(neighbors));
            } else {
                for neighbor in neighbors {
                    println!("{neighbor}");
                }
            }
        }
        Query::Weight(u, v) => {
            let weight = graph.edge_weight(u, v);
            if config.json {
                println!("{}", json!({ "u": u, "v": v, "weight": weight }));
            } else {
                match weight {
                    Some(w) => println!("{w}"),
                    None => println!("no edge between {u} and {v}"),
                }
            }
        }
        Query::Path(start, end) => {
            let path = graph.shortest_path_weighted(start, end);
            if config.json {
                println!(
                    "{}",
                    json!({ "steps": path, "total_weight": path_weight(&path) })
                );
            } else if path.is_empty() {
                println!("no path from {start} to {end}");
            } else {
                for step in &path {
                    println!("{} -> {} ({})", step.from, step.to, step.weight);
                }
                println!("total weight: {}", path_weight(&path));
            }
        }
        Query::Threshold(start, end) => {
            let threshold = graph.smallest_connecting_threshold(start, end);
            if config.json {
                println!(
                    "{}",
                    json!({
                        "threshold": threshold,
                        "path": graph.bottleneck_path(start, end),
                    })
                );
            } else {
                match threshold {
                    Some(t) => println!("{t}"),
                    None => println!("{start} and {end} are not connected"),
                }
            }
        }
        Query::Forest => {
            let forest = graph.minimum_spanning_forest();
            let edges = forest.edges();
            if config.json {
                let edges: Vec<_> = edges
                    .iter()
                    .map(|(u, v, w)| json!({ "u": u, "v": v, "weight": w }))
                    .collect();
                println!("{}", json!(edges));
            } else {
                for (u, v, w) in edges {
                    println!("{u},{v},{w}");
                }
            }
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config) = HarnessConfig::from_args(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let graph = match UndirectedGraph::from_csv_path(&config.edge_list) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("error: {}: {err}", config.edge_list);
            return ExitCode::FAILURE;
        }
    };

    run(&graph, &config);
    ExitCode::SUCCESS
}
