// src/dag/graph.rs

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::types::NodeId;

/// Why a submitted pipeline could not be turned into a graph.
///
/// These causes are only ever logged; callers of the validation service see
/// a single `is_dag: false` for all of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("node #{index} is not an object")]
    MalformedNode { index: usize },

    #[error("node #{index} has no usable `id`")]
    MissingNodeId { index: usize },

    #[error("node #{index} repeats id {id}")]
    DuplicateNodeId { index: usize, id: NodeId },

    #[error("edge #{index} is not an object")]
    MalformedEdge { index: usize },

    #[error("edge #{index} has no usable `{field}`")]
    MissingEndpoint { index: usize, field: &'static str },

    #[error("edge #{index} references unknown node {id}")]
    DanglingEndpoint { index: usize, id: NodeId },
}

/// Options that change what the builder accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Treat a repeated node id as malformed input instead of folding it
    /// into the first occurrence.
    pub reject_duplicate_ids: bool,
}

/// Outgoing adjacency for one request's pipeline.
///
/// Node ids are interned once, in input order; adjacency lists hold indices
/// into that table and keep edge input order.
#[derive(Debug, Clone, Default)]
pub struct PipelineGraph {
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl PipelineGraph {
    /// Build a graph from loose node and edge records.
    ///
    /// - No nodes: the empty graph, edges are not inspected.
    /// - Every node must carry a usable `id`.
    /// - Every edge must name a known `source` and `target`.
    pub fn build(
        nodes: &[Value],
        edges: &[Value],
        opts: BuildOptions,
    ) -> Result<Self, BuildError> {
        let mut graph = Self::default();

        if nodes.is_empty() {
            return Ok(graph);
        }

        for (index, node) in nodes.iter().enumerate() {
            let record = node
                .as_object()
                .ok_or(BuildError::MalformedNode { index })?;
            let id = record
                .get("id")
                .and_then(NodeId::from_json)
                .ok_or(BuildError::MissingNodeId { index })?;

            if graph.index.contains_key(&id) {
                if opts.reject_duplicate_ids {
                    return Err(BuildError::DuplicateNodeId { index, id });
                }
                continue;
            }
            graph.insert_node(id);
        }

        for (index, edge) in edges.iter().enumerate() {
            let record = edge
                .as_object()
                .ok_or(BuildError::MalformedEdge { index })?;
            let source = graph.endpoint(record, "source", index)?;
            let target = graph.endpoint(record, "target", index)?;
            graph.adjacency[source].push(target);
        }

        Ok(graph)
    }

    fn insert_node(&mut self, id: NodeId) {
        self.index.insert(id.clone(), self.ids.len());
        self.ids.push(id);
        self.adjacency.push(Vec::new());
    }

    /// Resolve one endpoint of an edge record to a node index.
    fn endpoint(
        &self,
        record: &serde_json::Map<String, Value>,
        field: &'static str,
        index: usize,
    ) -> Result<usize, BuildError> {
        let id = record
            .get(field)
            .and_then(NodeId::from_json)
            .ok_or(BuildError::MissingEndpoint { index, field })?;
        match self.index.get(&id) {
            Some(&idx) => Ok(idx),
            None => Err(BuildError::DanglingEndpoint { index, id }),
        }
    }

    /// Index-level adjacency, for traversals.
    pub(crate) fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }
}

#[cfg(test)]
impl PipelineGraph {
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Direct successors of `id`, in edge input order.
    pub fn successors(&self, id: &NodeId) -> Vec<&NodeId> {
        self.index
            .get(id)
            .map(|&idx| self.adjacency[idx].iter().map(|&t| &self.ids[t]).collect())
            .unwrap_or_default()
    }
}
