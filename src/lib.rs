// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod server;
pub mod service;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::errors::PipedagError;
pub use crate::service::{ValidationOptions, Validator};
pub use crate::types::{PipelinePayload, ValidationResult};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (+ CLI overrides)
/// - `--check` / `--dry-run` one-shot modes
/// - the HTTP server
pub async fn run(args: CliArgs) -> Result<()> {
    let explicit = args.config.as_ref().map(PathBuf::from);
    let mut cfg = config::resolve(explicit.as_deref())?;
    apply_overrides(&mut cfg, &args)?;

    if let Some(ref path) = args.check {
        return print_check(&cfg, Path::new(path));
    }

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    info!(addr = %cfg.bind_addr(), "starting pipedag server");
    server::serve(&cfg).await?;
    Ok(())
}

/// CLI `--host` / `--port` win over the config file; re-validate afterwards.
fn apply_overrides(cfg: &mut ConfigFile, args: &CliArgs) -> Result<()> {
    let mut raw = config::RawConfigFile {
        server: cfg.server.clone(),
        validation: cfg.validation,
    };
    if let Some(ref host) = args.host {
        raw.server.host = host.clone();
    }
    if let Some(port) = args.port {
        raw.server.port = port;
    }
    *cfg = ConfigFile::try_from(raw)?;
    Ok(())
}

/// Validate one pipeline file.
///
/// An unreadable file is `IoError`, a file that is not JSON is `JsonError`.
/// JSON that is not pipeline-shaped still yields the degraded result.
pub fn check_file(cfg: &ConfigFile, path: &Path) -> errors::Result<ValidationResult> {
    let contents = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;

    let validator = Validator::new(cfg.validation.into());
    Ok(validator.validate_json(value))
}

/// `--check`: print the result as JSON on stdout.
///
/// A file that is not JSON still prints the degraded result, then fails.
fn print_check(cfg: &ConfigFile, path: &Path) -> Result<()> {
    match check_file(cfg, path) {
        Ok(result) => {
            println!("{}", serde_json::to_string(&result)?);
            debug!(?result, "check complete");
            Ok(())
        }
        Err(err @ PipedagError::JsonError(_)) => {
            println!("{}", serde_json::to_string(&ValidationResult::degraded())?);
            Err(err).with_context(|| format!("{} is not valid JSON", path.display()))
        }
        Err(err) => {
            Err(err).with_context(|| format!("reading pipeline file {}", path.display()))
        }
    }
}

/// Simple dry-run output: print the effective settings.
fn print_dry_run(cfg: &ConfigFile) {
    println!("pipedag dry-run");
    println!("  server.host = {}", cfg.server.host);
    println!("  server.port = {}", cfg.server.port);
    println!("  server.max_body_bytes = {}", cfg.server.max_body_bytes);
    println!(
        "  validation.reject_duplicate_ids = {}",
        cfg.validation.reject_duplicate_ids
    );

    debug!("dry-run complete (not serving)");
}
