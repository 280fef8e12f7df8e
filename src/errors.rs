// src/errors.rs

//! Crate-wide error type for the service shell (config, IO, startup).
//!
//! The validation core does not use this: pipeline problems are reported
//! through [`crate::dag::BuildError`] and folded into the result.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipedagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PipedagError>;
