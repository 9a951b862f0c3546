mod state;

use super::utils::{PathResult, Route};
use crate::error::{Result, RouteError};
use crate::graph::{Graph, NodeIndex};
use state::BfsState;
use std::time::Instant;

/// Hop-count shortest path between two named nodes.
///
/// Edge lengths are carried along in the returned route but never influence
/// which route is chosen. `Ok(None)` means the nodes are in different
/// components.
pub fn bfs_find_path(graph: &Graph, start: &str, goal: &str) -> Result<Option<Route>> {
    let (start, goal) = resolve_endpoints(graph, start, goal)?;
    Ok(bfs_between(graph, start, goal))
}

/// Validates a query: both names must be known and distinct.
pub fn resolve_endpoints(graph: &Graph, start: &str, goal: &str) -> Result<(NodeIndex, NodeIndex)> {
    let start_node = graph.resolve(start)?;
    let goal_node = graph.resolve(goal)?;

    if start_node == goal_node {
        return Err(RouteError::SameEndpoints {
            name: start.to_string(),
        });
    }

    Ok((start_node, goal_node))
}

/// Index-level search for endpoints already checked by [`resolve_endpoints`].
pub fn bfs_between(graph: &Graph, start: NodeIndex, goal: NodeIndex) -> Option<Route> {
    debug_assert_ne!(start, goal, "endpoints must be distinct");
    BfsState::new(start).find_path_to_target(goal, graph)
}

/// Same as [`bfs_between`] but also reports how many nodes were reached and
/// how long the search took.
pub fn bfs_search(graph: &Graph, start: NodeIndex, goal: NodeIndex) -> PathResult {
    let search_timer = Instant::now();

    let mut bfs_state = BfsState::new(start);
    let path = bfs_state.find_path_to_target(goal, graph);

    PathResult {
        path,
        nodes_visited: bfs_state.visited.len(),
        elapsed_secs: search_timer.elapsed().as_secs_f64(),
    }
}
