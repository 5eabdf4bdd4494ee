// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::config::validate::validate_config;
use crate::errors::StepdagError;
use crate::types::RunMode;

/// Configuration as read from a TOML file.
///
/// ```toml
/// [scheduler]
/// workers = 5
/// base_offset = 60
///
/// [input]
/// path = "input.txt"
///
/// [output]
/// mode = "both"
/// timeline = false
/// ```
///
/// All sections are optional and have defaults. Turn it into a
/// [`ConfigFile`] with `ConfigFile::try_from` to validate it.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub scheduler: SchedulerSection,

    #[serde(default)]
    pub input: InputSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// `[scheduler]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerSection {
    /// Number of worker slots for the timed run.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Constant added to each task's alphabet position to get its duration.
    #[serde(default = "default_base_offset")]
    pub base_offset: i64,
}

fn default_workers() -> usize {
    5
}

fn default_base_offset() -> i64 {
    60
}

impl Default for SchedulerSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            base_offset: default_base_offset(),
        }
    }
}

/// `[input]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct InputSection {
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("input.txt")
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    /// `"order"`, `"timed"` or `"both"`.
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Print the per-task assignment table after a timed run.
    #[serde(default)]
    pub timeline: bool,
}

fn default_mode() -> String {
    "both".to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            timeline: false,
        }
    }
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub workers: usize,
    pub base_offset: i64,
    pub input_path: PathBuf,
    pub mode: RunMode,
    pub timeline: bool,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            base_offset: default_base_offset(),
            input_path: default_input_path(),
            mode: RunMode::default(),
            timeline: false,
        }
    }
}

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = StepdagError;

    fn try_from(raw: RawConfigFile) -> Result<Self, Self::Error> {
        validate_config(&raw)?;

        let mode = raw
            .output
            .mode
            .parse::<RunMode>()
            .map_err(|e| StepdagError::ConfigError(format!("invalid [output].mode: {e}")))?;

        Ok(Self {
            workers: raw.scheduler.workers,
            base_offset: raw.scheduler.base_offset,
            input_path: raw.input.path,
            mode,
            timeline: raw.output.timeline,
        })
    }
}
