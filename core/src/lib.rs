pub mod benchmark;
pub mod builder;
pub mod distance;
pub mod error;
pub mod graph;
pub mod lookup;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod point;
pub mod snapshot;
pub mod string_normalization;

// Re-export commonly used items
pub use benchmark::{BenchmarkResult, LatencyKind, run_benchmark};
pub use builder::build_graph;
pub use distance::{DistanceMetric, distance_km};
pub use error::{Result, RouteError};
pub use graph::{Edge, Graph, NodeIndex};
pub use lookup::{NameLookup, build_name_lookup, find_node_by_name, find_node_id};
pub use pathfinding::{PathResult, PathStep, Route, bfs_find_path};
pub use pathfinding_config::{BenchmarkConfig, ExecutionMode, GraphConfig, GraphSharing};
pub use point::{Coordinate, Point};
pub use snapshot::GraphSnapshot;
