use pipedag::Validator;
use pipedag::dag::{BuildOptions, PipelineGraph, has_cycle};
use pipedag_test_utils::oracle::{kahn_is_acyclic, petgraph_is_acyclic};
use proptest::prelude::*;
use serde_json::{Value, json};

// Random directed graph over `n` nodes, self-loops and parallel edges allowed.
fn graph_strategy(max_nodes: usize) -> impl Strategy<Value = (Vec<String>, Vec<(String, String)>)> {
    (1..=max_nodes).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n, 0..n), 0..(n * 2));
        edges.prop_map(move |pairs| {
            let nodes: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
            let edges = pairs
                .into_iter()
                .map(|(s, t)| (nodes[s].clone(), nodes[t].clone()))
                .collect();
            (nodes, edges)
        })
    })
}

// Acyclic by construction: edges only go from lower to higher index.
fn dag_strategy(max_nodes: usize) -> impl Strategy<Value = (Vec<String>, Vec<(String, String)>)> {
    graph_strategy(max_nodes).prop_map(|(nodes, edges)| {
        let index = |id: &str| id[1..].parse::<usize>().unwrap_or(0);
        let edges = edges
            .into_iter()
            .filter(|(s, t)| index(s) < index(t))
            .collect();
        (nodes, edges)
    })
}

fn to_json(nodes: &[String], edges: &[(String, String)]) -> (Vec<Value>, Vec<Value>) {
    (
        nodes.iter().map(|id| json!({ "id": id })).collect(),
        edges
            .iter()
            .map(|(s, t)| json!({ "source": s, "target": t }))
            .collect(),
    )
}

proptest! {
    #[test]
    fn detector_agrees_with_kahn_and_petgraph((nodes, edges) in graph_strategy(12)) {
        let (node_json, edge_json) = to_json(&nodes, &edges);
        let graph = PipelineGraph::build(&node_json, &edge_json, BuildOptions::default()).unwrap();

        let dfs_acyclic = !has_cycle(&graph);
        prop_assert_eq!(dfs_acyclic, kahn_is_acyclic(&nodes, &edges));
        prop_assert_eq!(dfs_acyclic, petgraph_is_acyclic(&nodes, &edges));
    }

    #[test]
    fn forward_only_graphs_are_always_dags((nodes, edges) in dag_strategy(16)) {
        let (node_json, edge_json) = to_json(&nodes, &edges);
        let body = json!({ "nodes": node_json, "edges": edge_json });

        let result = Validator::default().validate_json(body);
        prop_assert!(result.is_dag);
        prop_assert_eq!(result.num_nodes, nodes.len());
        prop_assert_eq!(result.num_edges, edges.len());
    }

    #[test]
    fn closing_a_path_back_to_its_start_creates_a_cycle(len in 1usize..40) {
        let nodes: Vec<String> = (0..len).map(|i| format!("n{i}")).collect();
        let mut edges: Vec<(String, String)> = nodes
            .windows(2)
            .map(|w| (w[0].clone(), w[1].clone()))
            .collect();
        edges.push((nodes[len - 1].clone(), nodes[0].clone()));

        let (node_json, edge_json) = to_json(&nodes, &edges);
        let graph = PipelineGraph::build(&node_json, &edge_json, BuildOptions::default()).unwrap();
        prop_assert!(has_cycle(&graph));
    }
}
