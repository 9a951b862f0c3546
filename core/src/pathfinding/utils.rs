use crate::graph::{Graph, NodeIndex};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// A node on a route and the length in km of the edge that reached it
/// (0 for the first node).
pub type PathStep = (NodeIndex, f64);

#[derive(Debug, Clone)]
pub struct PathResult {
    pub path: Option<Route>,
    pub nodes_visited: usize,
    pub elapsed_secs: f64,
}

/// Start-to-goal sequence of nodes; consecutive nodes share a graph edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    steps: Vec<PathStep>,
}

impl Route {
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn nodes(&self) -> Vec<NodeIndex> {
        self.steps.iter().map(|&(node, _)| node).collect()
    }

    pub fn names<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.steps.iter().map(|&(node, _)| graph.name(node)).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn hops(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn total_km(&self) -> f64 {
        self.steps.iter().map(|&(_, leg_km)| leg_km).sum()
    }

    pub fn start(&self) -> Option<NodeIndex> {
        self.steps.first().map(|&(node, _)| node)
    }

    pub fn goal(&self) -> Option<NodeIndex> {
        self.steps.last().map(|&(node, _)| node)
    }
}

pub fn reconstruct_path(
    parent_map: &FxHashMap<NodeIndex, (NodeIndex, f64)>,
    start: NodeIndex,
    target: NodeIndex,
) -> Route {
    let mut path = Vec::new();
    let mut current_node = target;

    while current_node != start {
        match parent_map.get(&current_node) {
            Some(&(parent_node, leg_km)) => {
                path.push((current_node, leg_km));
                current_node = parent_node;
            }
            None => break,
        }
    }

    path.push((start, 0.0));
    path.reverse();
    Route::new(path)
}
