// src/input/parser.rs

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::errors::{Result, StepdagError};
use crate::types::Edge;

static STEP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Step (\S+) must be finished before step (\S+) can begin\.$")
        .expect("step line regex is valid")
});

/// Parse one instruction line into a `(prerequisite, dependent)` edge.
///
/// Returns `None` for lines that do not match the instruction format.
pub fn parse_line(line: &str) -> Option<Edge> {
    let caps = STEP_LINE.captures(line.trim())?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// Parse a whole instruction listing.
///
/// Blank lines are skipped; any other unrecognized line is an error carrying
/// its 1-based line number.
pub fn parse_edges(text: &str) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(edge) => edges.push(edge),
            None => {
                return Err(StepdagError::ParseError {
                    line: idx + 1,
                    content: line.to_string(),
                });
            }
        }
    }

    debug!(edges = edges.len(), "parsed step instructions");
    Ok(edges)
}
