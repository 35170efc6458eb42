//! Minimum bottleneck queries over a spanning forest.
//!
//! The heaviest edge on the unique tree path between two nodes of a minimum
//! spanning forest is the smallest weight threshold that still connects them
//! in the original graph.

use crate::algorithm::{PathStep, SpanningForest};
use crate::graph::LabeledGraph;
use crate::Weight;

/// Returns the unique path from `start` to `end` inside `forest`, or an empty
/// vector if they lie in different trees or a label is unknown.
///
/// Traversal uses an explicit stack, so deep trees do not grow the call stack.
/// Being a forest, no node is reachable twice once the step back to the
/// parent is excluded.
pub fn tree_path(forest: &SpanningForest, start: &str, end: &str) -> Vec<PathStep> {
    let (Some(start), Some(end)) = (forest.resolve(start), forest.resolve(end)) else {
        return Vec::new();
    };
    if start == end {
        return Vec::new();
    }

    // (node, parent, weight of the edge from parent, depth)
    let mut stack: Vec<(&str, Option<&str>, Weight, usize)> = vec![(start, None, 0, 0)];
    // Current root-to-node chain of (node, weight of the edge into it)
    let mut trail: Vec<(&str, Weight)> = Vec::new();

    while let Some((node, parent, weight, depth)) = stack.pop() {
        trail.truncate(depth);
        trail.push((node, weight));

        if node == end {
            return trail
                .windows(2)
                .map(|pair| PathStep::new(pair[0].0, pair[1].0, pair[1].1))
                .collect();
        }

        for (next, next_weight) in forest.adjacent(node) {
            if Some(next) != parent {
                stack.push((next, Some(node), next_weight, depth + 1));
            }
        }
    }

    Vec::new()
}

/// Returns the heaviest edge weight on the tree path between `start` and `end`.
///
/// `Some(0)` when `start == end`, whether or not the label exists; `None` when
/// the two nodes are not connected in `forest`.
pub fn bottleneck_between(forest: &SpanningForest, start: &str, end: &str) -> Option<Weight> {
    if start == end {
        return Some(0);
    }
    let start = forest.resolve(start)?;
    if !forest.has_node(end) {
        return None;
    }

    // Each entry carries the largest weight seen on the way down to it
    let mut stack: Vec<(&str, Option<&str>, Weight)> = vec![(start, None, 0)];
    while let Some((node, parent, bottleneck)) = stack.pop() {
        if node == end {
            return Some(bottleneck);
        }
        for (next, weight) in forest.adjacent(node) {
            if Some(next) != parent {
                stack.push((next, Some(node), bottleneck.max(weight)));
            }
        }
    }

    None
}
