// src/types.rs

//! Wire types shared by the validation core and the HTTP layer.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of a pipeline node.
///
/// The JSON type is part of the identity: the integer `1` and the string
/// `"1"` name different nodes. Built only through [`NodeId::from_json`]
/// (or `From<&str>` / `From<i64>` in tests and builders), so an existing
/// `NodeId` is never empty or zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    Str(String),
    /// Wide enough for every JSON integer serde_json can hold (`i64` and `u64`).
    Int(i128),
}

impl NodeId {
    /// Interpret a JSON value as a node identifier.
    ///
    /// Usable identifiers are non-empty strings and non-zero integers.
    /// Everything else yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self::Str(s.clone())),
            Value::Number(n) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from))
                .filter(|&i| i != 0)
                .map(Self::Int),
            _ => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Str(s) => write!(f, "{s:?}"),
            NodeId::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<i64> for NodeId {
    fn from(i: i64) -> Self {
        Self::Int(i128::from(i))
    }
}

/// Raw request body for `POST .../pipelines/parse`.
///
/// Node and edge records are kept as loose JSON: the builder decides what
/// is usable. Unknown top-level fields (viewport, metadata, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelinePayload {
    #[serde(default)]
    pub nodes: Vec<Value>,

    #[serde(default)]
    pub edges: Vec<Value>,
}

/// The three facts reported for every submitted pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

impl ValidationResult {
    /// Fixed shape returned when the request could not be read at all.
    pub const fn degraded() -> Self {
        Self {
            num_nodes: 0,
            num_edges: 0,
            is_dag: false,
        }
    }
}
