// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;
pub mod report;
pub mod types;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, default_config_path, load_and_validate};
use crate::dag::{AlphabetOffsetCost, DependencyGraph, Scheduler, TimedRun};
use crate::input::load_edges;
use crate::types::{RunMode, TaskName};

pub use crate::dag::{sequential_order, timed_run, validate_order};
pub use crate::errors::{Result as StepdagResult, StepdagError};

/// Effective settings after merging the config file with CLI overrides.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub input_path: PathBuf,
    pub workers: usize,
    pub base_offset: i64,
    pub mode: RunMode,
    pub timeline: bool,
}

impl RunSettings {
    /// CLI flags win over config values.
    pub fn merge(cfg: ConfigFile, args: &CliArgs) -> Self {
        Self {
            input_path: args
                .input
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or(cfg.input_path),
            workers: args.workers.unwrap_or(cfg.workers),
            base_offset: args.base_offset.unwrap_or(cfg.base_offset),
            mode: args.mode.map(RunMode::from).unwrap_or(cfg.mode),
            timeline: args.timeline || cfg.timeline,
        }
    }
}

/// Results of one invocation; fields are `None` when the mode skipped them.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub order: Option<Vec<TaskName>>,
    pub timed: Option<TimedRun>,
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - reading and parsing the step instructions
/// - serial ordering and/or the timed run
/// - printing results to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_config(&args)?;
    let settings = RunSettings::merge(cfg, &args);

    let edges = load_edges(&settings.input_path).with_context(|| {
        format!(
            "failed to load steps from {}",
            settings.input_path.display()
        )
    })?;
    let graph = DependencyGraph::from_edges(edges);
    info!(
        tasks = graph.len(),
        input = %settings.input_path.display(),
        "built dependency graph"
    );

    if args.dry_run {
        print_dry_run(&graph, &settings);
        return Ok(());
    }

    let outcome = execute(&graph, &settings)?;
    print!("{}", render(&outcome, settings.timeline));
    Ok(())
}

/// Compute whatever `settings.mode` asks for.
pub fn execute(graph: &DependencyGraph, settings: &RunSettings) -> errors::Result<Outcome> {
    let scheduler = Scheduler::new(graph);
    let mut outcome = Outcome::default();

    if settings.mode.wants_order() {
        outcome.order = Some(scheduler.sequential_order()?);
    }

    if settings.mode.wants_timed() {
        let cost = AlphabetOffsetCost::new(settings.base_offset);
        outcome.timed = Some(scheduler.timed(settings.workers, &cost)?);
    }

    Ok(outcome)
}

/// Text printed on stdout for an outcome.
pub fn render(outcome: &Outcome, timeline: bool) -> String {
    let mut out = String::new();

    if let Some(order) = &outcome.order {
        out.push_str(&report::format_order(order));
        out.push('\n');
    }

    if let Some(run) = &outcome.timed {
        out.push_str(&run.finish_time.to_string());
        out.push('\n');
        if timeline {
            out.push_str(&report::format_timeline(run));
            out.push('\n');
        }
    }

    out
}

fn resolve_config(args: &CliArgs) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return load_and_validate(path).with_context(|| format!("failed to load config {path}"));
    }

    let default_path = default_config_path();
    if default_path.exists() {
        return load_and_validate(&default_path)
            .with_context(|| format!("failed to load config {}", default_path.display()));
    }

    debug!("no config file found; using defaults");
    Ok(ConfigFile::default())
}

/// Dry-run output: print tasks and their direct prerequisites.
fn print_dry_run(graph: &DependencyGraph, settings: &RunSettings) {
    println!("stepdag dry-run");
    println!("  workers = {}", settings.workers);
    println!("  base_offset = {}", settings.base_offset);
    println!("  mode = {:?}", settings.mode);
    println!();

    println!("tasks ({}):", graph.len());
    for task in graph.tasks() {
        let prereqs = graph.prerequisites_of(task);
        if prereqs.is_empty() {
            println!("  - {task}");
        } else {
            let names: Vec<&str> = prereqs.iter().map(|s| s.as_str()).collect();
            println!("  - {task} (after {})", names.join(", "));
        }
    }

    debug!("dry-run complete (nothing scheduled)");
}
