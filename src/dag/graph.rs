// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::types::{Edge, TaskName};

/// Internal node structure: stores immediate prerequisites and dependents.
#[derive(Debug, Clone, Default)]
struct DagNode {
    /// Direct prerequisites: tasks that must finish before this one can start.
    prerequisites: BTreeSet<TaskName>,
    /// Direct dependents: tasks that wait on this one.
    dependents: BTreeSet<TaskName>,
}

/// Immutable task graph keyed by task name.
///
/// The task universe is exactly the set of edge endpoints. Nothing is
/// validated on construction: self-loops and cycles are kept as-is and only
/// surface later as tasks that never become ready.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: BTreeMap<TaskName, DagNode>,
}

impl DependencyGraph {
    /// Build a graph from `(prerequisite, dependent)` pairs.
    ///
    /// Duplicate edges collapse into one.
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<TaskName>,
        B: Into<TaskName>,
    {
        let mut nodes: BTreeMap<TaskName, DagNode> = BTreeMap::new();

        for (prereq, dependent) in edges {
            let prereq: TaskName = prereq.into();
            let dependent: TaskName = dependent.into();

            nodes
                .entry(prereq.clone())
                .or_default()
                .dependents
                .insert(dependent.clone());
            nodes
                .entry(dependent)
                .or_default()
                .prerequisites
                .insert(prereq);
        }

        Self { nodes }
    }

    /// All task names, in ascending order.
    pub fn all_tasks(&self) -> BTreeSet<TaskName> {
        self.nodes.keys().cloned().collect()
    }

    /// Borrowing iterator over task names, in ascending order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, task: &str) -> bool {
        self.nodes.contains_key(task)
    }

    /// Tasks not in `completed` whose prerequisites are all in `completed`.
    pub fn ready_tasks(&self, completed: &BTreeSet<TaskName>) -> BTreeSet<TaskName> {
        self.nodes
            .iter()
            .filter(|(name, node)| {
                !completed.contains(*name) && node.prerequisites.is_subset(completed)
            })
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Immediate prerequisites of a task. Unknown tasks have none.
    pub fn prerequisites_of(&self, task: &str) -> BTreeSet<TaskName> {
        self.nodes
            .get(task)
            .map(|n| n.prerequisites.clone())
            .unwrap_or_default()
    }

    /// Immediate dependents of a task. Unknown tasks have none.
    pub fn dependents_of(&self, task: &str) -> BTreeSet<TaskName> {
        self.nodes
            .get(task)
            .map(|n| n.dependents.clone())
            .unwrap_or_default()
    }

    /// All edges as `(prerequisite, dependent)` pairs, sorted.
    pub fn edges(&self) -> Vec<Edge> {
        self.nodes
            .iter()
            .flat_map(|(name, node)| {
                node.dependents
                    .iter()
                    .map(move |dep| (name.clone(), dep.clone()))
            })
            .collect()
    }

    /// Name the task at which a cycle was detected, if the graph has any.
    ///
    /// Only used to make malformed-graph errors easier to read.
    pub fn find_cycle_member(&self) -> Option<TaskName> {
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

        for name in self.nodes.keys() {
            graph.add_node(name.as_str());
        }

        for (name, node) in self.nodes.iter() {
            for dependent in node.dependents.iter() {
                graph.add_edge(name.as_str(), dependent.as_str(), ());
            }
        }

        // Self-loops are reported as cycles by `toposort` too.
        match toposort(&graph, None) {
            Ok(_order) => None,
            Err(cycle) => Some(cycle.node_id().to_string()),
        }
    }
}
