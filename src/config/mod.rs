// src/config/mod.rs

//! Configuration loading and validation for stepdag.
//!
//! - `model.rs` holds the TOML-backed data model.
//! - `loader.rs` reads a config file from disk.
//! - `validate.rs` checks worker count, cost offset and input path.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigFile, InputSection, OutputSection, RawConfigFile, SchedulerSection};
pub use validate::validate_config;
