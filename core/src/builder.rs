use crate::distance::DistanceMetric;
use crate::error::{Result, RouteError};
use crate::graph::{Edge, Graph, NodeIndex};
use crate::pathfinding_config::GraphConfig;
use crate::point::Point;
use std::time::Instant;
use tracing::debug;

/// Builds the k-nearest-neighbor proximity graph.
///
/// Every point proposes an edge to each of its `neighbors` closest points.
/// Proposals are not symmetric, so a node's degree may exceed `neighbors`;
/// a pair proposed from both ends still produces a single edge.
pub fn build_graph(points: Vec<Point>, config: &GraphConfig) -> Result<Graph> {
    if points.is_empty() {
        return Err(RouteError::EmptyPointSet);
    }
    if config.neighbors == 0 {
        return Err(RouteError::InvalidNeighborCount);
    }

    let build_timer = Instant::now();
    let neighbors = config.neighbors.min(points.len() - 1);

    let mut candidate_edges = Vec::with_capacity(points.len() * neighbors);
    for origin in 0..points.len() {
        let mut ranked = rank_by_distance(origin, &points, config.metric);
        ranked.truncate(neighbors);

        candidate_edges.extend(
            ranked
                .into_iter()
                .map(|(neighbor, distance_km)| Edge::new(origin, neighbor, distance_km)),
        );
    }

    let proposed = candidate_edges.len();
    let graph = Graph::from_parts(points, candidate_edges)?;

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        proposed,
        max_degree = graph.max_degree(),
        k = neighbors,
        metric = config.metric.as_str(),
        elapsed_ms = build_timer.elapsed().as_secs_f64() * 1000.0,
        "built proximity graph"
    );

    Ok(graph)
}

/// All other points ordered by distance from `origin`. The sort is stable, so
/// equidistant points keep their input order.
fn rank_by_distance(
    origin: NodeIndex,
    points: &[Point],
    metric: DistanceMetric,
) -> Vec<(NodeIndex, f64)> {
    let from = points[origin].coordinate();

    let mut distances: Vec<(NodeIndex, f64)> = points
        .iter()
        .enumerate()
        .filter(|&(other, _)| other != origin)
        .map(|(other, point)| (other, metric.distance_km(from, point.coordinate())))
        .collect();

    distances.sort_by(|a, b| a.1.total_cmp(&b.1));
    distances
}
