// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::RunMode;

/// Command-line arguments for `stepdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stepdag",
    version,
    about = "Order dependent steps and time them across a pool of workers.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the step instructions.
    ///
    /// Default: `[input].path` from the config, else `input.txt`.
    #[arg(long, value_name = "PATH")]
    pub input: Option<String>,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Stepdag.toml` is used when it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Number of workers for the timed run (overrides the config).
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Constant added to each step's alphabet position (overrides the config).
    #[arg(long, value_name = "N")]
    pub base_offset: Option<i64>,

    /// Which result to compute.
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Print the per-step worker assignments of the timed run.
    #[arg(long)]
    pub timeline: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STEPDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse the input and print the graph, but don't schedule anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Output mode as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum Mode {
    Order,
    Timed,
    Both,
}

impl From<Mode> for RunMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Order => RunMode::Order,
            Mode::Timed => RunMode::Timed,
            Mode::Both => RunMode::Both,
        }
    }
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
