// src/dag/mod.rs

//! Pipeline graph construction and acyclicity checking.
//!
//! - [`graph`] turns loose node/edge records into an adjacency structure.
//! - [`cycle`] decides whether that structure contains a directed cycle.

pub mod cycle;
pub mod graph;

pub use cycle::{has_cycle, is_dag};
pub use graph::{BuildError, BuildOptions, PipelineGraph};
