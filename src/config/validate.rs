// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PipedagError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = PipedagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.server, raw.validation))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_server(cfg)?;
    Ok(())
}

fn validate_server(cfg: &RawConfigFile) -> Result<()> {
    if cfg.server.host.trim().is_empty() {
        return Err(PipedagError::ConfigError(
            "[server].host must not be empty".to_string(),
        ));
    }

    if cfg.server.port == 0 {
        return Err(PipedagError::ConfigError(
            "[server].port must be >= 1 (got 0)".to_string(),
        ));
    }

    if cfg.server.max_body_bytes == 0 {
        return Err(PipedagError::ConfigError(
            "[server].max_body_bytes must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = ConfigFile::try_from(RawConfigFile::default()).unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8000");
        assert!(!cfg.validation.reject_duplicate_ids);
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut raw = RawConfigFile::default();
        raw.server.port = 0;
        match ConfigFile::try_from(raw) {
            Err(PipedagError::ConfigError(msg)) => assert!(msg.contains("port")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn blank_host_is_rejected() {
        let mut raw = RawConfigFile::default();
        raw.server.host = "  ".to_string();
        assert!(matches!(
            ConfigFile::try_from(raw),
            Err(PipedagError::ConfigError(_))
        ));
    }
}
