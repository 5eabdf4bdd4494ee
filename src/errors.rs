// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

use crate::types::TaskName;

#[derive(Error, Debug)]
pub enum StepdagError {
    /// The ready set ran dry while some tasks were still incomplete.
    ///
    /// `remaining` is sorted; `cycle_hint` names the task where a cycle was
    /// detected, if any.
    #[error("{}", malformed_graph_message(.remaining, .cycle_hint))]
    MalformedGraph {
        remaining: Vec<TaskName>,
        cycle_hint: Option<TaskName>,
    },

    #[error("invalid cost {cost} for task '{task}': cost must be positive")]
    InvalidCost { task: TaskName, cost: i64 },

    #[error("clock overflow: task '{task}' with cost {cost} cannot start at {start}")]
    ClockOverflow { task: TaskName, start: u64, cost: i64 },

    #[error("invalid worker count {0}: at least one worker is required")]
    InvalidWorkerCount(usize),

    #[error("parse error on line {line}: unrecognized step `{content}`")]
    ParseError { line: usize, content: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn malformed_graph_message(remaining: &[TaskName], cycle_hint: &Option<TaskName>) -> String {
    let mut msg = format!(
        "malformed graph: {} task(s) can never become ready: [{}]",
        remaining.len(),
        remaining.join(", ")
    );
    if let Some(task) = cycle_hint {
        msg.push_str(&format!(" (cycle through '{task}')"));
    }
    msg
}

pub type Result<T> = std::result::Result<T, StepdagError>;
