#![allow(dead_code)]

use stepdag::dag::DependencyGraph;
use stepdag::types::{Edge, TaskName};

/// Builder for `DependencyGraph` to simplify test setup.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `prereq` must finish before `dependent`.
    pub fn edge(mut self, prereq: &str, dependent: &str) -> Self {
        self.edges.push((prereq.to_string(), dependent.to_string()));
        self
    }

    /// Link every consecutive pair: `a -> b -> c ...`.
    pub fn chain(mut self, tasks: &[&str]) -> Self {
        for pair in tasks.windows(2) {
            self.edges.push((pair[0].to_string(), pair[1].to_string()));
        }
        self
    }

    /// `root` must finish before each of `leaves`.
    pub fn fan_out(mut self, root: &str, leaves: &[&str]) -> Self {
        for leaf in leaves {
            self.edges.push((root.to_string(), leaf.to_string()));
        }
        self
    }

    /// Each of `roots` must finish before `sink`.
    pub fn fan_in(mut self, roots: &[&str], sink: &str) -> Self {
        for root in roots {
            self.edges.push((root.to_string(), sink.to_string()));
        }
        self
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn build(self) -> DependencyGraph {
        DependencyGraph::from_edges(self.edges)
    }
}

/// The seven-edge example graph: C before A and F, A before B and D, and
/// B, D, F all before E.
pub fn sample_graph() -> DependencyGraph {
    GraphBuilder::new()
        .fan_out("C", &["A", "F"])
        .fan_out("A", &["B", "D"])
        .fan_in(&["B", "D", "F"], "E")
        .build()
}

/// The sample graph as step instruction text.
pub const SAMPLE_INSTRUCTIONS: &str = "\
Step C must be finished before step A can begin.
Step C must be finished before step F can begin.
Step A must be finished before step B can begin.
Step A must be finished before step D can begin.
Step B must be finished before step E can begin.
Step D must be finished before step E can begin.
Step F must be finished before step E can begin.
";

pub fn names(items: &[&str]) -> Vec<TaskName> {
    items.iter().map(|s| s.to_string()).collect()
}
