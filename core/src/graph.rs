use crate::error::{Result, RouteError};
use crate::point::Point;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// Position of a node, equal to the position of its point in the input list.
pub type NodeIndex = usize;

/// Undirected edge. Stored with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub a: NodeIndex,
    pub b: NodeIndex,
    pub distance_km: f64,
}

impl Edge {
    pub fn new(from: NodeIndex, to: NodeIndex, distance_km: f64) -> Self {
        Self {
            a: from.min(to),
            b: from.max(to),
            distance_km,
        }
    }

    fn key(&self) -> (NodeIndex, NodeIndex) {
        (self.a, self.b)
    }
}

/// Read-only proximity graph.
///
/// Neighbors of every node are kept in ascending index order, so traversal
/// order only depends on the order of the input points.
#[derive(Debug, Clone)]
pub struct Graph {
    points: Vec<Point>,
    index: FxHashMap<String, NodeIndex>,
    adjacency: Vec<Vec<(NodeIndex, f64)>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Assembles a graph from points and candidate edges. Repeated proposals
    /// for the same pair keep the first one; self-edges are dropped.
    pub(crate) fn from_parts(
        points: Vec<Point>,
        candidate_edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self> {
        if points.is_empty() {
            return Err(RouteError::EmptyPointSet);
        }

        let mut index = FxHashMap::with_capacity_and_hasher(points.len(), Default::default());
        for (node, point) in points.iter().enumerate() {
            if index.insert(point.name().to_string(), node).is_some() {
                return Err(RouteError::DuplicatePoint {
                    name: point.name().to_string(),
                });
            }
        }

        let mut adjacency = vec![Vec::new(); points.len()];
        let mut seen = FxHashSet::default();
        let mut edges = Vec::new();

        for edge in candidate_edges {
            if edge.a == edge.b || edge.b >= points.len() || !seen.insert(edge.key()) {
                continue;
            }
            adjacency[edge.a].push((edge.b, edge.distance_km));
            adjacency[edge.b].push((edge.a, edge.distance_km));
            edges.push(edge);
        }

        for neighbors in &mut adjacency {
            neighbors.sort_by_key(|&(neighbor, _)| neighbor);
        }

        Ok(Self {
            points,
            index,
            adjacency,
            edges,
        })
    }

    pub fn node_count(&self) -> usize {
        self.points.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, node: NodeIndex) -> Option<&Point> {
        self.points.get(node)
    }

    /// Name of a node; empty for an index outside the graph.
    pub fn name(&self, node: NodeIndex) -> &str {
        self.points.get(node).map_or("", Point::name)
    }

    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    /// Like [`Graph::node_index`] but reports unknown names as an error.
    pub fn resolve(&self, name: &str) -> Result<NodeIndex> {
        self.node_index(name).ok_or_else(|| RouteError::UnknownNode {
            name: name.to_string(),
        })
    }

    /// Neighbors with edge lengths, ascending by index.
    pub fn neighbors(&self, node: NodeIndex) -> &[(NodeIndex, f64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, node: NodeIndex) -> usize {
        self.neighbors(node).len()
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn isolated_nodes(&self) -> usize {
        self.adjacency.iter().filter(|n| n.is_empty()).count()
    }

    /// Edges in the order they were first proposed.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn has_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.neighbors(a)
            .binary_search_by_key(&b, |&(neighbor, _)| neighbor)
            .is_ok()
    }

    pub fn edge_distance(&self, a: NodeIndex, b: NodeIndex) -> Option<f64> {
        let neighbors = self.neighbors(a);
        neighbors
            .binary_search_by_key(&b, |&(neighbor, _)| neighbor)
            .ok()
            .map(|pos| neighbors[pos].1)
    }
}
