// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `pipedag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pipedag",
    version,
    about = "Validate pipeline graphs: count nodes and edges, check they form a DAG.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Pipedag.toml` is used when present, otherwise built-in
    /// defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Address to bind, overriding `[server].host`.
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind, overriding `[server].port`.
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PIPEDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate a pipeline JSON file, print the result and exit.
    #[arg(long, value_name = "PATH", conflicts_with = "dry_run")]
    pub check: Option<String>,

    /// Load + validate config, print the effective settings, don't serve.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
