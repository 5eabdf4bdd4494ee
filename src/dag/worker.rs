// src/dag/worker.rs

//! Worker slots for the timed simulation.

use crate::types::TaskName;

/// State of one worker slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkerSlot {
    #[default]
    Empty,
    /// Holding `task`, which finishes when the clock reaches `until`.
    Busy { task: TaskName, until: u64 },
}

impl WorkerSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, WorkerSlot::Empty)
    }

    /// Completion timestamp, if busy.
    pub fn until(&self) -> Option<u64> {
        match self {
            WorkerSlot::Empty => None,
            WorkerSlot::Busy { until, .. } => Some(*until),
        }
    }

    /// Empty the slot if its task finishes at or before `now`, returning it.
    pub fn drain(&mut self, now: u64) -> Option<TaskName> {
        if !self.until().is_some_and(|until| until <= now) {
            return None;
        }

        match std::mem::take(self) {
            WorkerSlot::Busy { task, .. } => Some(task),
            WorkerSlot::Empty => None,
        }
    }
}

/// Fixed-size pool of worker slots, filled in index order.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    slots: Vec<WorkerSlot>,
}

impl WorkerPool {
    pub fn new(worker_count: usize) -> Self {
        Self {
            slots: vec![WorkerSlot::Empty; worker_count],
        }
    }

    pub fn slots(&self) -> &[WorkerSlot] {
        &self.slots
    }

    pub fn busy_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// Indices of idle slots, lowest first.
    pub fn idle_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Put `task` into slot `index`. The slot must be idle.
    pub fn occupy(&mut self, index: usize, task: TaskName, until: u64) {
        debug_assert!(self.slots[index].is_empty(), "slot {index} already busy");
        self.slots[index] = WorkerSlot::Busy { task, until };
    }

    /// Empty every slot finished by `now`, returning `(slot, task)` pairs in
    /// slot order.
    pub fn drain(&mut self, now: u64) -> Vec<(usize, TaskName)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.drain(now).map(|task| (i, task)))
            .collect()
    }

    /// Earliest completion timestamp among busy slots.
    pub fn next_event(&self) -> Option<u64> {
        self.slots.iter().filter_map(WorkerSlot::until).min()
    }
}
