// src/dag/scheduler.rs

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info};

use crate::dag::cost::CostModel;
use crate::dag::graph::DependencyGraph;
use crate::dag::simulation::{TimedRun, TimedSimulation};
use crate::errors::{Result, StepdagError};
use crate::types::TaskName;

/// Scheduler borrows the immutable graph and owns nothing else between runs.
///
/// Every run starts from an empty completed set, so repeated calls on the
/// same graph produce identical results.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler<'g> {
    graph: &'g DependencyGraph,
}

impl<'g> Scheduler<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self { graph }
    }

    /// Single-worker order: repeatedly take the smallest ready task.
    ///
    /// Fails with [`StepdagError::MalformedGraph`] instead of returning a
    /// partial order when some tasks can never become ready.
    pub fn sequential_order(&self) -> Result<Vec<TaskName>> {
        let mut completed: BTreeSet<TaskName> = BTreeSet::new();
        let mut order: Vec<TaskName> = Vec::with_capacity(self.graph.len());

        while completed.len() < self.graph.len() {
            let ready = self.graph.ready_tasks(&completed);

            let Some(next) = ready.into_iter().next() else {
                return Err(self.malformed(&completed));
            };

            debug!(task = %next, position = order.len(), "next task in serial order");
            completed.insert(next.clone());
            order.push(next);
        }

        info!(tasks = order.len(), "computed serial order");
        Ok(order)
    }

    /// Run the bounded-worker simulation to completion.
    pub fn timed<C: CostModel + ?Sized>(&self, worker_count: usize, cost: &C) -> Result<TimedRun> {
        let run = TimedSimulation::new(self.graph, worker_count, cost)?.run()?;

        info!(
            workers = worker_count,
            tasks = run.timeline.len(),
            finish_time = run.finish_time,
            "timed run complete"
        );

        Ok(run)
    }

    /// Start a step-by-step simulation without running it.
    pub fn simulation<'a, C: CostModel + ?Sized>(
        &self,
        worker_count: usize,
        cost: &'a C,
    ) -> Result<TimedSimulation<'a, C>>
    where
        'g: 'a,
    {
        TimedSimulation::new(self.graph, worker_count, cost)
    }

    fn malformed(&self, completed: &BTreeSet<TaskName>) -> StepdagError {
        let remaining: Vec<TaskName> = self
            .graph
            .tasks()
            .filter(|t| !completed.contains(*t))
            .map(|t| t.to_string())
            .collect();

        StepdagError::MalformedGraph {
            remaining,
            cycle_hint: self.graph.find_cycle_member(),
        }
    }
}

/// Check that `order` is a permutation of the graph's tasks in which every
/// prerequisite appears before its dependents.
pub fn validate_order(graph: &DependencyGraph, order: &[TaskName]) -> bool {
    if order.len() != graph.len() {
        return false;
    }

    let mut position: HashMap<&str, usize> = HashMap::with_capacity(order.len());
    for (i, task) in order.iter().enumerate() {
        if !graph.contains(task) || position.insert(task.as_str(), i).is_some() {
            return false;
        }
    }

    graph
        .edges()
        .iter()
        .all(|(prereq, dependent)| position[prereq.as_str()] < position[dependent.as_str()])
}
