use crate::error::{Result, RouteError};
use crate::graph::{Graph, NodeIndex};
use crate::pathfinding::{Route, bfs_between, resolve_endpoints};
use crate::pathfinding_config::{BenchmarkConfig, ExecutionMode, GraphSharing};
use crate::snapshot::GraphSnapshot;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::hint::black_box;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// What [`BenchmarkResult::avg_latency`] measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatencyKind {
    /// Sequential runs: wall-clock of one search.
    PerCall,
    /// Parallel runs: total wall-clock divided by the number of searches.
    /// Searches overlap, so this is the inverse of throughput and is
    /// typically lower than the latency of any individual search.
    AggregateThroughput,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub start: String,
    pub goal: String,
    /// Representative route; `None` only if no run found one.
    pub path: Option<Route>,
    pub repeats: usize,
    pub mode: ExecutionMode,
    /// Resolved worker count (1 for sequential runs).
    pub workers: usize,
    pub sharing: GraphSharing,
    pub total_time: Duration,
    /// `total_time / repeats`; see [`LatencyKind`].
    pub avg_latency: Duration,
    pub latency_kind: LatencyKind,
}

impl BenchmarkResult {
    pub fn path_found(&self) -> bool {
        self.path.is_some()
    }

    pub fn avg_latency_ms(&self) -> f64 {
        self.avg_latency.as_secs_f64() * 1000.0
    }

    pub fn total_time_ms(&self) -> f64 {
        self.total_time.as_secs_f64() * 1000.0
    }

    pub fn searches_per_second(&self) -> f64 {
        let secs = self.total_time.as_secs_f64();
        if secs > 0.0 {
            self.repeats as f64 / secs
        } else {
            0.0
        }
    }
}

/// Solves the same query `config.repeats` times and reports the average time
/// per search along with one of the routes found.
///
/// Endpoints are validated before anything is timed.
pub fn run_benchmark(
    graph: &Graph,
    start: &str,
    goal: &str,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult> {
    if config.repeats == 0 {
        return Err(RouteError::InvalidRepeatCount);
    }

    let (start_node, goal_node) = resolve_endpoints(graph, start, goal)?;
    let query = Query {
        start: start_node,
        goal: goal_node,
    };

    let (outcomes, total_time, workers, latency_kind) = match config.mode {
        ExecutionMode::Sequential => {
            let (outcome, elapsed) = run_sequential(graph, query, config.repeats);
            (vec![outcome], elapsed, 1, LatencyKind::PerCall)
        }
        ExecutionMode::Parallel { workers } => {
            let workers = resolve_worker_count(workers);
            let (outcomes, elapsed) =
                run_parallel(graph, query, config.repeats, workers, config.sharing)?;
            (outcomes, elapsed, workers, LatencyKind::AggregateThroughput)
        }
    };

    let path = representative_path(outcomes);
    let avg_latency = total_time.div_f64(config.repeats as f64);

    info!(
        start,
        goal,
        repeats = config.repeats,
        workers,
        found = path.is_some(),
        hops = path.as_ref().map_or(0, Route::hops),
        total_ms = total_time.as_secs_f64() * 1000.0,
        avg_ms = avg_latency.as_secs_f64() * 1000.0,
        "benchmark finished"
    );

    Ok(BenchmarkResult {
        start: start.to_string(),
        goal: goal.to_string(),
        path,
        repeats: config.repeats,
        mode: config.mode,
        workers,
        sharing: config.sharing,
        total_time,
        avg_latency,
        latency_kind,
    })
}

/// `0` resolves to the number of available CPUs.
pub fn resolve_worker_count(requested: usize) -> usize {
    if requested == 0 {
        num_cpus::get().max(1)
    } else {
        requested
    }
}

#[derive(Debug, Clone, Copy)]
struct Query {
    start: NodeIndex,
    goal: NodeIndex,
}

fn run_sequential(graph: &Graph, query: Query, repeats: usize) -> (Option<Route>, Duration) {
    let timer = Instant::now();

    let mut path = None;
    for _ in 0..repeats {
        path = black_box(search_once(graph, query));
    }

    (path, timer.elapsed())
}

fn search_once(graph: &Graph, query: Query) -> Option<Route> {
    bfs_between(graph, query.start, query.goal)
}

/// Fans `repeats` identical searches out over a dedicated pool of `workers`
/// threads and blocks until every one of them has reported back.
fn run_parallel(
    graph: &Graph,
    query: Query,
    repeats: usize,
    workers: usize,
    sharing: GraphSharing,
) -> Result<(Vec<Option<Route>>, Duration)> {
    let snapshot = match sharing {
        GraphSharing::Shared => None,
        GraphSharing::Replicated => Some(GraphSnapshot::encode(graph)?),
    };

    run_on_pool(graph, query, repeats, workers, snapshot.as_ref(), search_once)
}

/// Timed part of a parallel run. With a snapshot, every worker thread
/// searches its own decoded copy; otherwise all of them read `graph`.
fn run_on_pool<F>(
    graph: &Graph,
    query: Query,
    repeats: usize,
    workers: usize,
    snapshot: Option<&GraphSnapshot>,
    search: F,
) -> Result<(Vec<Option<Route>>, Duration)>
where
    F: Fn(&Graph, Query) -> Option<Route> + Sync,
{
    let timer = Instant::now();

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("citypath-worker-{i}"))
        .build()
        .map_err(|e| RouteError::ConcurrencyFailure {
            reason: format!("could not start {workers} workers: {e}"),
        })?;

    let replicas = snapshot
        .map(|snapshot| decode_replicas(&pool, snapshot))
        .transpose()?;

    debug!(workers, repeats, replicated = replicas.is_some(), "dispatching search tasks");

    let outcomes = pool.install(|| match &replicas {
        None => (0..repeats)
            .into_par_iter()
            .map(|task| run_task(graph, query, task, &search))
            .collect::<Result<Vec<_>>>(),
        Some(replicas) => (0..repeats)
            .into_par_iter()
            .map(|task| {
                let replica = rayon::current_thread_index()
                    .and_then(|worker| replicas.get(worker))
                    .ok_or_else(|| RouteError::ConcurrencyFailure {
                        reason: format!("search task {task} ran outside the worker pool"),
                    })?;
                run_task(replica, query, task, &search)
            })
            .collect::<Result<Vec<_>>>(),
    })?;

    Ok((outcomes, timer.elapsed()))
}

/// One graph per pool thread, indexed by thread index. Each copy is decoded
/// on the thread that will search it.
fn decode_replicas(pool: &ThreadPool, snapshot: &GraphSnapshot) -> Result<Vec<Graph>> {
    pool.broadcast(|ctx| {
        snapshot.decode().map_err(|e| RouteError::ConcurrencyFailure {
            reason: format!("worker {} could not rebuild the graph: {e}", ctx.index()),
        })
    })
    .into_iter()
    .collect()
}

fn run_task<F>(graph: &Graph, query: Query, task: usize, search: &F) -> Result<Option<Route>>
where
    F: Fn(&Graph, Query) -> Option<Route>,
{
    panic::catch_unwind(AssertUnwindSafe(|| search(graph, query))).map_err(|payload| {
        RouteError::ConcurrencyFailure {
            reason: format!("search task {task} panicked: {}", panic_message(payload.as_ref())),
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}

/// First route found in task order. Every run answers the same query, so a
/// different route from another run points at a non-deterministic graph copy.
fn representative_path(outcomes: Vec<Option<Route>>) -> Option<Route> {
    let mut found = outcomes.into_iter().flatten();
    let first = found.next()?;

    let divergent = found.filter(|other| *other != first).count();
    if divergent > 0 {
        warn!(divergent, "parallel searches returned different routes");
    }

    Some(first)
}
