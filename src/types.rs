// src/types.rs

use std::str::FromStr;

/// Canonical task identifier used throughout the crate.
///
/// Identifiers are compared with plain string ordering, which is also the
/// tie-break used by every scheduling decision.
pub type TaskName = String;

/// A `(prerequisite, dependent)` pair: `prerequisite` must finish before
/// `dependent` may start.
pub type Edge = (TaskName, TaskName);

/// Which result(s) the binary should compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Only the single-worker serial order.
    Order,
    /// Only the multi-worker finish time.
    Timed,
    #[default]
    Both,
}

impl RunMode {
    pub fn wants_order(self) -> bool {
        matches!(self, RunMode::Order | RunMode::Both)
    }

    pub fn wants_timed(self) -> bool {
        matches!(self, RunMode::Timed | RunMode::Both)
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "order" => Ok(RunMode::Order),
            "timed" => Ok(RunMode::Timed),
            "both" => Ok(RunMode::Both),
            other => Err(format!(
                "invalid mode: {other} (expected \"order\", \"timed\" or \"both\")"
            )),
        }
    }
}
