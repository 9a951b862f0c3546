use crate::Args;
use citypath_core::{
    BenchmarkResult, DistanceMetric, ExecutionMode, Graph, GraphSharing, LatencyKind,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub neighbors: usize,
    pub metric: DistanceMetric,
    pub runs: usize,
    pub mode: ExecutionMode,
    pub workers: usize,
    pub sharing: GraphSharing,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonCity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_km: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonCity {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub km_from_previous: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub total_time_ms: f64,
    pub avg_time_ms: f64,
    pub latency_kind: LatencyKind,
    pub searches_per_second: f64,
}

pub fn create_json_output(result: &BenchmarkResult, args: &Args, graph: &Graph) -> JsonOutput {
    let json_path = result.path.as_ref().map(|route| {
        route
            .steps()
            .iter()
            .enumerate()
            .filter_map(|(i, &(node, leg_km))| {
                graph.point(node).map(|point| JsonCity {
                    name: point.name().to_string(),
                    lat: point.lat(),
                    lng: point.lng(),
                    km_from_previous: if i > 0 { Some(leg_km) } else { None },
                })
            })
            .collect()
    });

    JsonOutput {
        query: JsonQuery {
            from: result.start.clone(),
            to: result.goal.clone(),
            options: JsonOptions {
                neighbors: args.neighbors,
                metric: args.metric.into(),
                runs: result.repeats,
                mode: result.mode,
                workers: result.workers,
                sharing: result.sharing,
            },
        },
        result: JsonResult {
            found: result.path_found(),
            path: json_path,
            total_km: result.path.as_ref().map(|route| route.total_km()),
        },
        stats: JsonStats {
            total_time_ms: result.total_time_ms(),
            avg_time_ms: result.avg_latency_ms(),
            latency_kind: result.latency_kind,
            searches_per_second: result.searches_per_second(),
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
