// src/report.rs

//! Plain-text rendering of scheduling results.

use std::fmt::Write;

use crate::dag::TimedRun;
use crate::types::TaskName;

/// Join a serial order into one string, e.g. `CABDFE`.
pub fn format_order(order: &[TaskName]) -> String {
    order.concat()
}

/// One row per assignment: task, worker, start, finish.
pub fn format_timeline(run: &TimedRun) -> String {
    let width = run
        .timeline
        .iter()
        .map(|a| a.task.len())
        .max()
        .unwrap_or(0)
        .max("task".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  worker  start  finish", "task");
    for a in run.timeline.iter() {
        let _ = writeln!(
            out,
            "{:<width$}  {:>6}  {:>5}  {:>6}",
            a.task, a.worker, a.start, a.finish
        );
    }
    let _ = write!(
        out,
        "finished at {} with {} worker(s)",
        run.finish_time, run.worker_count
    );
    out
}
