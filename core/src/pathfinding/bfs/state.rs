use super::super::utils::{Route, reconstruct_path};
use crate::graph::{Graph, NodeIndex};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

pub struct BfsState {
    start: NodeIndex,
    queue: VecDeque<NodeIndex>,
    pub visited: FxHashSet<NodeIndex>,
    parent_map: FxHashMap<NodeIndex, (NodeIndex, f64)>,
}

impl BfsState {
    pub fn new(start: NodeIndex) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            start,
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: NodeIndex, current: NodeIndex, leg_km: f64) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, (current, leg_km));
            self.queue.push_back(neighbor);
        }
    }

    /// Expands the frontier in FIFO order and stops as soon as `target`
    /// shows up among the neighbors of the node being expanded.
    pub fn find_path_to_target(&mut self, target: NodeIndex, graph: &Graph) -> Option<Route> {
        while let Some(current) = self.queue.pop_front() {
            for &(neighbor, leg_km) in graph.neighbors(current) {
                if neighbor == target {
                    self.visited.insert(target);
                    self.parent_map.insert(target, (current, leg_km));
                    return Some(reconstruct_path(&self.parent_map, self.start, target));
                }
                self.visit_neighbor(neighbor, current, leg_km);
            }
        }

        None
    }
}
