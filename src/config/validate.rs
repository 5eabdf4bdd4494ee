// src/config/validate.rs

use crate::config::model::RawConfigFile;
use crate::errors::{Result, StepdagError};

/// Run semantic validation against a deserialized configuration.
///
/// This checks:
/// - `[scheduler].workers >= 1`
/// - `[scheduler].base_offset >= 0`
/// - `[input].path` is not empty
///
/// `[output].mode` is checked when it is parsed into a `RunMode` during
/// conversion to `ConfigFile`. The input file's existence is reported when
/// the file is read.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_scheduler(cfg)?;
    validate_input(cfg)?;
    Ok(())
}

fn validate_scheduler(cfg: &RawConfigFile) -> Result<()> {
    if cfg.scheduler.workers == 0 {
        return Err(StepdagError::ConfigError(
            "[scheduler].workers must be >= 1 (got 0)".to_string(),
        ));
    }

    if cfg.scheduler.base_offset < 0 {
        return Err(StepdagError::ConfigError(format!(
            "[scheduler].base_offset must be >= 0 (got {})",
            cfg.scheduler.base_offset
        )));
    }

    Ok(())
}

fn validate_input(cfg: &RawConfigFile) -> Result<()> {
    if cfg.input.path.as_os_str().is_empty() {
        return Err(StepdagError::ConfigError(
            "[input].path must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_workers_is_rejected() {
        let mut cfg = RawConfigFile::default();
        cfg.scheduler.workers = 0;
        match validate_config(&cfg) {
            Err(StepdagError::ConfigError(msg)) => assert!(msg.contains("workers")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn negative_offset_is_rejected() {
        let mut cfg = RawConfigFile::default();
        cfg.scheduler.base_offset = -1;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&RawConfigFile::default()).is_ok());
    }
}
