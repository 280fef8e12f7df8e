//! Independent acyclicity checks used to cross-validate the DFS detector.

use std::collections::{HashMap, VecDeque};

use petgraph::graphmap::DiGraphMap;

/// Kahn's algorithm: the graph is acyclic iff every node can be removed in
/// zero-in-degree order. Parallel edges count once per occurrence.
pub fn kahn_is_acyclic(nodes: &[String], edges: &[(String, String)]) -> bool {
    let mut in_degree: HashMap<&str, usize> = nodes.iter().map(|n| (n.as_str(), 0)).collect();
    let mut out: HashMap<&str, Vec<&str>> = HashMap::new();

    for (s, t) in edges {
        out.entry(s.as_str()).or_default().push(t.as_str());
        *in_degree.entry(t.as_str()).or_insert(0) += 1;
    }

    let mut queue: VecDeque<&str> = in_degree
        .iter()
        .filter(|&(_, &deg)| deg == 0)
        .map(|(&n, _)| n)
        .collect();

    let mut removed = 0;
    while let Some(n) = queue.pop_front() {
        removed += 1;
        for &t in out.get(n).map(Vec::as_slice).unwrap_or(&[]) {
            if let Some(deg) = in_degree.get_mut(t) {
                *deg -= 1;
                if *deg == 0 {
                    queue.push_back(t);
                }
            }
        }
    }

    removed == in_degree.len()
}

/// petgraph's own cycle check, as a second opinion.
pub fn petgraph_is_acyclic(nodes: &[String], edges: &[(String, String)]) -> bool {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for n in nodes {
        graph.add_node(n.as_str());
    }
    for (s, t) in edges {
        graph.add_edge(s.as_str(), t.as_str(), ());
    }
    !petgraph::algo::is_cyclic_directed(&graph)
}
