// src/config/model.rs

use serde::Deserialize;

use crate::service::ValidationOptions;

/// Configuration exactly as read from TOML, before validation.
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 8000
///
/// [validation]
/// reject_duplicate_ids = true
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub validation: ValidationSection,
}

/// Validated configuration. Only obtainable through
/// `ConfigFile::try_from(RawConfigFile)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub server: ServerSection,
    pub validation: ValidationSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(server: ServerSection, validation: ValidationSection) -> Self {
        Self { server, validation }
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest request body accepted on the parse route.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// `[validation]` section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ValidationSection {
    /// Reject pipelines that repeat a node id. Off by default: a repeated
    /// id is folded into its first occurrence.
    #[serde(default)]
    pub reject_duplicate_ids: bool,
}

impl From<ValidationSection> for ValidationOptions {
    fn from(section: ValidationSection) -> Self {
        ValidationOptions {
            reject_duplicate_ids: section.reject_duplicate_ids,
        }
    }
}
