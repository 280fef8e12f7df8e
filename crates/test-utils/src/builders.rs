#![allow(dead_code)]

use pipedag::PipelinePayload;
use serde_json::{Value, json};

/// Builder for pipeline request bodies, shaped like what the editor sends.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    nodes: Vec<Value>,
    edges: Vec<Value>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the given id and some editor-style metadata.
    pub fn node(mut self, id: &str) -> Self {
        self.nodes.push(json!({
            "id": id,
            "type": "customInput",
            "position": { "x": 0, "y": 0 },
            "data": { "id": id },
        }));
        self
    }

    pub fn nodes(mut self, ids: &[&str]) -> Self {
        for id in ids {
            self = self.node(id);
        }
        self
    }

    pub fn edge(mut self, source: &str, target: &str) -> Self {
        self.edges.push(json!({
            "id": format!("reactflow__edge-{source}-{target}"),
            "source": source,
            "target": target,
        }));
        self
    }

    pub fn edges(mut self, pairs: &[(&str, &str)]) -> Self {
        for (s, t) in pairs {
            self = self.edge(s, t);
        }
        self
    }

    /// Push an arbitrary node record (for malformed-input tests).
    pub fn raw_node(mut self, node: Value) -> Self {
        self.nodes.push(node);
        self
    }

    /// Push an arbitrary edge record (for malformed-input tests).
    pub fn raw_edge(mut self, edge: Value) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn build_json(self) -> Value {
        json!({ "nodes": self.nodes, "edges": self.edges })
    }

    pub fn build(self) -> PipelinePayload {
        PipelinePayload {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
