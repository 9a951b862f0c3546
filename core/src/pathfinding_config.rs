use crate::distance::DistanceMetric;
use serde::{Deserialize, Serialize};

/// Configuration for proximity graph construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Number of nearest neighbors each point proposes edges to
    pub neighbors: usize,
    /// How distances between points are measured
    pub metric: DistanceMetric,
}

impl GraphConfig {
    pub fn new(neighbors: usize, metric: DistanceMetric) -> Self {
        Self { neighbors, metric }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            neighbors: 3,
            metric: DistanceMetric::Geodesic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ExecutionMode {
    #[default]
    Sequential,
    /// `workers == 0` means one worker per available CPU.
    Parallel { workers: usize },
}

/// How parallel workers get hold of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphSharing {
    /// Every worker reads the same immutable graph.
    #[default]
    Shared,
    /// Every worker rebuilds its own copy from a binary snapshot.
    Replicated,
}

/// Configuration for repeated-query benchmarks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// How many times the query is solved
    pub repeats: usize,
    pub mode: ExecutionMode,
    /// Ignored in sequential mode
    pub sharing: GraphSharing,
}

impl BenchmarkConfig {
    pub fn new(repeats: usize, mode: ExecutionMode, sharing: GraphSharing) -> Self {
        Self {
            repeats,
            mode,
            sharing,
        }
    }

    pub fn sequential(repeats: usize) -> Self {
        Self::new(repeats, ExecutionMode::Sequential, GraphSharing::Shared)
    }

    pub fn parallel(repeats: usize, workers: usize, sharing: GraphSharing) -> Self {
        Self::new(repeats, ExecutionMode::Parallel { workers }, sharing)
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            repeats: 10_000,
            mode: ExecutionMode::Sequential,
            sharing: GraphSharing::Shared,
        }
    }
}
