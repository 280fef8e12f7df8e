// src/dag/cycle.rs

//! Cycle detection over a [`PipelineGraph`].
//!
//! Classic three-colour depth-first search, driven by an explicit stack so
//! that long chains cannot exhaust the thread stack.

use tracing::trace;

use crate::dag::graph::PipelineGraph;

/// Traversal state of a node during one detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    /// On the current DFS path; reaching it again closes a cycle.
    InProgress,
    /// Fully explored with no cycle below it.
    Done,
}

/// One DFS frame: a node and the position of the next neighbour to visit.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    next: usize,
}

/// Returns `true` if `graph` contains at least one directed cycle.
///
/// Roots are tried in node input order and neighbours in edge input order.
/// The search stops at the first back-edge.
pub fn has_cycle(graph: &PipelineGraph) -> bool {
    let adjacency = graph.adjacency();
    let mut color = vec![Color::Unvisited; adjacency.len()];
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..adjacency.len() {
        if color[root] != Color::Unvisited {
            continue;
        }

        color[root] = Color::InProgress;
        stack.push(Frame { node: root, next: 0 });

        while let Some(frame) = stack.last_mut() {
            let Some(&neighbour) = adjacency[frame.node].get(frame.next) else {
                color[frame.node] = Color::Done;
                stack.pop();
                continue;
            };
            frame.next += 1;

            match color[neighbour] {
                Color::InProgress => {
                    trace!(from = frame.node, to = neighbour, "back-edge found");
                    return true;
                }
                Color::Unvisited => {
                    color[neighbour] = Color::InProgress;
                    stack.push(Frame {
                        node: neighbour,
                        next: 0,
                    });
                }
                Color::Done => {}
            }
        }
    }

    false
}

/// Convenience negation of [`has_cycle`].
pub fn is_dag(graph: &PipelineGraph) -> bool {
    !has_cycle(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::graph::BuildOptions;
    use serde_json::{Value, json};

    fn graph(ids: &[&str], edges: &[(&str, &str)]) -> PipelineGraph {
        let nodes: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
        let edges: Vec<Value> = edges
            .iter()
            .map(|(s, t)| json!({ "source": s, "target": t }))
            .collect();
        PipelineGraph::build(&nodes, &edges, BuildOptions::default()).unwrap()
    }

    #[test]
    fn empty_graph_is_acyclic() {
        assert!(!has_cycle(&PipelineGraph::default()));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        assert!(has_cycle(&graph(&["a"], &[("a", "a")])));
    }

    #[test]
    fn chain_is_acyclic() {
        assert!(is_dag(&graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")])));
    }

    #[test]
    fn triangle_is_a_cycle() {
        assert!(has_cycle(&graph(
            &["a", "b", "c"],
            &[("a", "b"), ("b", "c"), ("c", "a")]
        )));
    }

    #[test]
    fn diamond_shared_descendant_is_not_a_cycle() {
        assert!(is_dag(&graph(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]
        )));
    }

    #[test]
    fn cycle_reachable_only_from_a_later_root() {
        // "a" is explored first and finishes clean; the cycle sits in a
        // separate component.
        assert!(has_cycle(&graph(
            &["a", "b", "x", "y"],
            &[("a", "b"), ("x", "y"), ("y", "x")]
        )));
    }

    #[test]
    fn cross_edge_into_done_subtree_is_not_a_cycle() {
        assert!(is_dag(&graph(
            &["c", "a", "b"],
            &[("c", "a"), ("b", "c"), ("b", "a")]
        )));
    }

    #[test]
    fn parallel_edges_are_not_a_cycle() {
        assert!(is_dag(&graph(&["a", "b"], &[("a", "b"), ("a", "b")])));
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let ids: Vec<String> = (0..200_000).map(|i| format!("n{i}")).collect();
        let nodes: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
        let mut edges: Vec<Value> = ids
            .windows(2)
            .map(|w| json!({ "source": w[0], "target": w[1] }))
            .collect();
        let g = PipelineGraph::build(&nodes, &edges, BuildOptions::default()).unwrap();
        assert!(is_dag(&g));

        edges.push(json!({ "source": ids[ids.len() - 1], "target": ids[0] }));
        let g = PipelineGraph::build(&nodes, &edges, BuildOptions::default()).unwrap();
        assert!(has_cycle(&g));
    }
}
