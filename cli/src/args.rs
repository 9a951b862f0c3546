use citypath_core::{BenchmarkConfig, DistanceMetric, ExecutionMode, GraphConfig, GraphSharing};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "citypath")]
#[command(about = "Find the fewest-hop route between two cities and time the search")]
pub struct Args {
    /// Starting city
    #[arg(required_unless_present = "list")]
    pub from: Option<String>,

    /// Destination city
    #[arg(required_unless_present = "list")]
    pub to: Option<String>,

    /// JSON file with an array of {"city", "lat", "lng"} records
    #[arg(short, long, value_name = "PATH", env = "CITYPATH_DATA")]
    pub data: Option<String>,

    /// Connect every city to its N nearest neighbors
    #[arg(short = 'k', long, value_name = "N", default_value = "3")]
    pub neighbors: usize,

    /// How distances between cities are measured
    #[arg(short, long, value_enum, default_value = "geodesic")]
    pub metric: MetricArg,

    /// Number of times the search is repeated for timing
    #[arg(short, long, value_name = "COUNT", default_value = "10000")]
    pub runs: usize,

    /// Spread the repeated searches over a worker pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker count for --parallel (0 or unset = one per CPU)
    #[arg(short, long, value_name = "COUNT", requires = "parallel")]
    pub workers: Option<usize>,

    /// Give every worker its own copy of the graph instead of sharing one
    #[arg(long, requires = "parallel")]
    pub replicate: bool,

    /// Print the result as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and info-level logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,

    /// List the available cities and exit
    #[arg(short, long)]
    pub list: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricArg {
    Geodesic,
    Haversine,
}

impl From<MetricArg> for DistanceMetric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::Geodesic => DistanceMetric::Geodesic,
            MetricArg::Haversine => DistanceMetric::Haversine,
        }
    }
}

impl Args {
    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig::new(self.neighbors, self.metric.into())
    }

    pub fn benchmark_config(&self) -> BenchmarkConfig {
        let mode = if self.parallel {
            ExecutionMode::Parallel {
                workers: self.workers.unwrap_or(0),
            }
        } else {
            ExecutionMode::Sequential
        };
        let sharing = if self.replicate {
            GraphSharing::Replicated
        } else {
            GraphSharing::Shared
        };

        BenchmarkConfig::new(self.runs, mode, sharing)
    }
}
