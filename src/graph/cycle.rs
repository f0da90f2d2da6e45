//! Cycle detection over a [`ServiceGraph`]
//!
//! Start nodes are tried in graph order. Each walk is a backtracking DFS that
//! keeps an on-stack set plus a single `next` map recording, for every node,
//! the child its most recent outgoing edge led to. When the walk steps onto a
//! node that is already on the stack, the path is rebuilt by following `next`
//! from the start node until a node repeats. Nodes still on the stack always
//! point at the child currently being explored, so the rebuilt path is the live
//! branch from the start node followed by the loop back to the repeated node.

use super::ServiceGraph;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, trace};

/// Ordered service names ending in the node that closes the loop, e.g.
/// `[A, B, C, D, B]`. The first element is the start node of the walk that
/// found the cycle; it equals the last element when the start node is itself
/// on the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cycle(Vec<String>);

impl Cycle {
    pub fn new(path: Vec<String>) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &[String] {
        &self.0
    }

    /// The path as one delimited string
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(" -> "))
    }
}

pub struct CycleFinder<'g> {
    graph: &'g ServiceGraph,
    found: Option<Cycle>,
}

impl<'g> CycleFinder<'g> {
    pub fn new(graph: &'g ServiceGraph) -> Self {
        Self { graph, found: None }
    }

    /// Searches the graph and remembers the first cycle found.
    /// Stops at the first start node whose walk hits a cycle.
    pub fn has_cycle(&mut self) -> bool {
        self.found = None;
        let graph = self.graph;

        for start in graph.names() {
            let mut walk = Walk::new(graph);
            if walk.visit(start, None) {
                let cycle = walk.reconstruct(start);
                debug!(start, cycle = %cycle, "Dependency cycle detected");
                self.found = Some(cycle);
                return true;
            }
            trace!(start, "No cycle reachable from start node");
        }

        false
    }

    /// The cycle found by the last [`has_cycle`](Self::has_cycle) call
    pub fn found_cycle(&self) -> Option<&Cycle> {
        self.found.as_ref()
    }

    /// Runs the search and hands back the cycle, if any
    pub fn into_cycle(mut self) -> Option<Cycle> {
        self.has_cycle();
        self.found
    }
}

struct Walk<'g> {
    graph: &'g ServiceGraph,
    on_stack: HashSet<&'g str>,
    next: HashMap<&'g str, &'g str>,
}

impl<'g> Walk<'g> {
    fn new(graph: &'g ServiceGraph) -> Self {
        Self {
            graph,
            on_stack: HashSet::new(),
            next: HashMap::new(),
        }
    }

    fn visit(&mut self, node: &'g str, prev: Option<&'g str>) -> bool {
        if let Some(prev) = prev {
            self.next.insert(prev, node);
        }

        if self.on_stack.contains(node) {
            return true;
        }

        // literals and names outside the graph are leaves
        let graph = self.graph;
        let Some(descriptor) = graph.get(node) else {
            return false;
        };

        self.on_stack.insert(node);
        let found = descriptor
            .dependencies
            .iter()
            .any(|dep| self.visit(dep.as_str(), Some(node)));
        self.on_stack.remove(node);

        found
    }

    fn reconstruct(&self, start: &'g str) -> Cycle {
        let mut path = vec![start.to_string()];
        let mut seen = HashSet::new();
        let mut node = start;

        loop {
            seen.insert(node);
            let Some(&next) = self.next.get(node) else {
                break;
            };
            node = next;
            path.push(node.to_string());
            if seen.contains(node) {
                break;
            }
        }

        Cycle::new(path)
    }
}
