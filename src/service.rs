// src/service.rs

//! The validation service: the only entry point the HTTP layer calls.
//!
//! Every request yields a [`ValidationResult`]. Structural problems in the
//! submitted pipeline never surface as errors; they collapse into
//! `is_dag: false` with the raw counts preserved.

use serde_json::Value;
use tracing::debug;

use crate::dag::{self, BuildOptions, PipelineGraph};
use crate::types::{PipelinePayload, ValidationResult};

/// Per-service options, taken from `[validation]` in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    pub reject_duplicate_ids: bool,
}

impl From<ValidationOptions> for BuildOptions {
    fn from(opts: ValidationOptions) -> Self {
        BuildOptions {
            reject_duplicate_ids: opts.reject_duplicate_ids,
        }
    }
}

/// Stateless validator. Each call builds and discards its own graph, so one
/// instance can be shared freely between request handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    opts: ValidationOptions,
}

impl Validator {
    pub fn new(opts: ValidationOptions) -> Self {
        Self { opts }
    }

    /// Count the submitted records and check that they form a DAG.
    pub fn validate(&self, payload: &PipelinePayload) -> ValidationResult {
        let num_nodes = payload.nodes.len();
        let num_edges = payload.edges.len();

        let is_dag = match PipelineGraph::build(&payload.nodes, &payload.edges, self.opts.into())
        {
            Ok(graph) => dag::is_dag(&graph),
            Err(cause) => {
                debug!(%cause, "pipeline rejected while building graph");
                false
            }
        };

        debug!(num_nodes, num_edges, is_dag, "pipeline validated");

        ValidationResult {
            num_nodes,
            num_edges,
            is_dag,
        }
    }

    /// Validate an already-parsed JSON body.
    ///
    /// A body that is not an object, or whose `nodes` / `edges` are not
    /// arrays, has no meaningful counts and yields the degraded result.
    pub fn validate_json(&self, body: Value) -> ValidationResult {
        match serde_json::from_value::<PipelinePayload>(body) {
            Ok(payload) => self.validate(&payload),
            Err(err) => {
                debug!(%err, "request body does not have a pipeline shape");
                ValidationResult::degraded()
            }
        }
    }
}
