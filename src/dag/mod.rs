// src/dag/mod.rs

//! Dependency graph and scheduling.
//!
//! - [`graph`] holds the immutable task graph and answers readiness queries.
//! - [`scheduler`] produces the serial order and drives timed runs.
//! - [`simulation`] is the discrete-event state machine behind timed runs.
//! - [`worker`] models the worker slots.
//! - [`cost`] provides injectable task duration models.

pub mod cost;
pub mod graph;
pub mod scheduler;
pub mod simulation;
pub mod worker;

pub use cost::{AlphabetOffsetCost, CostModel, ordinal_value};
pub use graph::DependencyGraph;
pub use scheduler::{Scheduler, validate_order};
pub use simulation::{Assignment, SimulationStep, TimedRun, TimedSimulation};
pub use worker::{WorkerPool, WorkerSlot};

use crate::errors::Result;
use crate::types::TaskName;

/// Serial order under a single worker, smallest ready task first.
pub fn sequential_order(graph: &DependencyGraph) -> Result<Vec<TaskName>> {
    Scheduler::new(graph).sequential_order()
}

/// Total simulated time to finish every task with `worker_count` workers.
pub fn timed_run<C: CostModel + ?Sized>(
    graph: &DependencyGraph,
    worker_count: usize,
    cost: &C,
) -> Result<u64> {
    Scheduler::new(graph)
        .timed(worker_count, cost)
        .map(|run| run.finish_time)
}
