//! Random edge-list generators for benchmarks and tests.
//!
//! All generators take the random source as a parameter so callers can seed it.
//! Node labels are `{prefix}{index}`.

use rand::Rng;

use crate::io::EdgeRecord;
use crate::Weight;

/// Label used by the generators for the `index`-th node
pub fn node_label(prefix: &str, index: usize) -> String {
    format!("{prefix}{index}")
}

/// Generates a connected graph with `n` nodes: a random spanning tree plus
/// `extra_edges` random chords. Weights are drawn from `1..=max_weight`.
///
/// Chords may repeat a pair; loading keeps the last weight.
pub fn random_connected<R: Rng>(
    rng: &mut R,
    n: usize,
    extra_edges: usize,
    max_weight: Weight,
) -> Vec<EdgeRecord> {
    component_edges(rng, "n", n, extra_edges, max_weight)
}

/// Generates `components` disjoint connected graphs of `nodes_per_component`
/// nodes each, labelled `c{component}_{index}`
pub fn random_forest<R: Rng>(
    rng: &mut R,
    components: usize,
    nodes_per_component: usize,
    extra_edges: usize,
    max_weight: Weight,
) -> Vec<EdgeRecord> {
    let mut edges = Vec::new();
    for c in 0..components {
        let prefix = format!("c{c}_");
        edges.extend(component_edges(
            rng,
            &prefix,
            nodes_per_component,
            extra_edges,
            max_weight,
        ));
    }
    edges
}

/// Generates a `width` x `height` grid with 4-connectivity and uniform weight.
/// Node `(x, y)` is labelled `g{y * width + x}`.
pub fn grid(width: usize, height: usize, weight: Weight) -> Vec<EdgeRecord> {
    let mut edges = Vec::new();
    let label = |x: usize, y: usize| node_label("g", y * width + x);

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push(EdgeRecord::new(label(x, y), label(x + 1, y), weight));
            }
            if y + 1 < height {
                edges.push(EdgeRecord::new(label(x, y), label(x, y + 1), weight));
            }
        }
    }
    edges
}

fn component_edges<R: Rng>(
    rng: &mut R,
    prefix: &str,
    n: usize,
    extra_edges: usize,
    max_weight: Weight,
) -> Vec<EdgeRecord> {
    let max_weight = max_weight.max(1);
    let mut edges = Vec::with_capacity(n + extra_edges);

    // Attach each node to a random earlier one
    for i in 1..n {
        let j = rng.gen_range(0..i);
        let weight = rng.gen_range(1..=max_weight);
        edges.push(EdgeRecord::new(
            node_label(prefix, i),
            node_label(prefix, j),
            weight,
        ));
    }

    if n > 1 {
        let mut added = 0;
        while added < extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u == v {
                continue;
            }
            let weight = rng.gen_range(1..=max_weight);
            edges.push(EdgeRecord::new(
                node_label(prefix, u),
                node_label(prefix, v),
                weight,
            ));
            added += 1;
        }
    }

    edges
}
