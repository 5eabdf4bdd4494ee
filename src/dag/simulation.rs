// src/dag/simulation.rs

//! Discrete-event simulation of a bounded worker pool.
//!
//! Each [`TimedSimulation::step`] runs one event boundary:
//! 1. drain every slot whose task finishes at or before the clock,
//! 2. hand ready tasks to idle slots (smallest name to lowest slot index),
//! 3. jump the clock to the next completion timestamp.
//!
//! The clock only ever moves to a completion event, never by single ticks.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::dag::cost::CostModel;
use crate::dag::graph::DependencyGraph;
use crate::dag::worker::WorkerPool;
use crate::errors::{Result, StepdagError};
use crate::types::TaskName;

/// One task dispatched to a worker slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub task: TaskName,
    /// Index of the worker slot that ran the task.
    pub worker: usize,
    pub start: u64,
    pub finish: u64,
}

/// Structured result of a single simulation step.
///
/// Useful for tests that want to walk the simulation one event at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationStep {
    /// Clock value at which this step drained and assigned.
    pub clock: u64,
    /// Tasks that completed at `clock`, in slot order.
    pub drained: Vec<TaskName>,
    /// Tasks started at `clock`, in slot order.
    pub assigned: Vec<Assignment>,
    /// Whether every task is complete after this step.
    pub finished: bool,
}

/// Outcome of a full timed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedRun {
    /// Largest completion timestamp ever assigned (0 for an empty graph).
    pub finish_time: u64,
    pub worker_count: usize,
    /// Every assignment, in dispatch order.
    pub timeline: Vec<Assignment>,
}

impl TimedRun {
    pub fn assignment_for(&self, task: &str) -> Option<&Assignment> {
        self.timeline.iter().find(|a| a.task == task)
    }
}

/// Mutable per-run state for the timed variant.
///
/// The graph is only borrowed; completion and in-flight tracking live here.
pub struct TimedSimulation<'a, C: CostModel + ?Sized> {
    graph: &'a DependencyGraph,
    cost: &'a C,
    clock: u64,
    completed: BTreeSet<TaskName>,
    in_flight: BTreeSet<TaskName>,
    pool: WorkerPool,
    timeline: Vec<Assignment>,
    finish_time: u64,
}

impl<'a, C: CostModel + ?Sized> TimedSimulation<'a, C> {
    pub fn new(graph: &'a DependencyGraph, worker_count: usize, cost: &'a C) -> Result<Self> {
        if worker_count == 0 {
            return Err(StepdagError::InvalidWorkerCount(worker_count));
        }

        Ok(Self {
            graph,
            cost,
            clock: 0,
            completed: BTreeSet::new(),
            in_flight: BTreeSet::new(),
            pool: WorkerPool::new(worker_count),
            timeline: Vec::new(),
            finish_time: 0,
        })
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn is_finished(&self) -> bool {
        self.completed.len() == self.graph.len()
    }

    pub fn in_flight(&self) -> &BTreeSet<TaskName> {
        &self.in_flight
    }

    /// Run one event boundary: drain, assign, advance.
    pub fn step(&mut self) -> Result<SimulationStep> {
        let now = self.clock;

        let mut drained = Vec::new();
        for (worker, task) in self.pool.drain(now) {
            debug!(task = %task, worker, clock = now, "task finished");
            self.in_flight.remove(&task);
            self.completed.insert(task.clone());
            drained.push(task);
        }

        let assigned = self.assign_ready(now)?;

        if self.is_finished() {
            debug!(clock = now, finish_time = self.finish_time, "all tasks complete");
            return Ok(SimulationStep {
                clock: now,
                drained,
                assigned,
                finished: true,
            });
        }

        match self.pool.next_event() {
            Some(next) => {
                trace!(from = now, to = next, "advancing clock");
                self.clock = next;
            }
            None => return Err(self.stalled()),
        }

        Ok(SimulationStep {
            clock: now,
            drained,
            assigned,
            finished: false,
        })
    }

    /// Step until every task is complete.
    pub fn run(mut self) -> Result<TimedRun> {
        while !self.is_finished() {
            self.step()?;
        }

        Ok(TimedRun {
            finish_time: self.finish_time,
            worker_count: self.pool.slots().len(),
            timeline: self.timeline,
        })
    }

    /// Fill idle slots in index order with ready tasks in ascending name
    /// order.
    fn assign_ready(&mut self, now: u64) -> Result<Vec<Assignment>> {
        let ready: Vec<TaskName> = self
            .graph
            .ready_tasks(&self.completed)
            .into_iter()
            .filter(|t| !self.in_flight.contains(t))
            .collect();

        let idle = self.pool.idle_indices();
        let mut assigned = Vec::new();

        for (worker, task) in idle.into_iter().zip(ready) {
            let duration = self.cost.cost(&task);
            if duration <= 0 {
                return Err(StepdagError::InvalidCost {
                    task,
                    cost: duration,
                });
            }

            let Some(finish) = now.checked_add(duration as u64) else {
                return Err(StepdagError::ClockOverflow {
                    task,
                    start: now,
                    cost: duration,
                });
            };
            debug!(task = %task, worker, start = now, finish, "assigning task to worker");

            self.pool.occupy(worker, task.clone(), finish);
            self.in_flight.insert(task.clone());
            self.finish_time = self.finish_time.max(finish);

            let assignment = Assignment {
                task,
                worker,
                start: now,
                finish,
            };
            self.timeline.push(assignment.clone());
            assigned.push(assignment);
        }

        Ok(assigned)
    }

    fn stalled(&self) -> StepdagError {
        let remaining: Vec<TaskName> = self
            .graph
            .tasks()
            .filter(|t| !self.completed.contains(*t))
            .map(|t| t.to_string())
            .collect();

        debug!(
            clock = self.clock,
            remaining = remaining.len(),
            "no task in flight and none ready; graph cannot complete"
        );

        StepdagError::MalformedGraph {
            remaining,
            cycle_hint: self.graph.find_cycle_member(),
        }
    }
}
