use citypath_core::{
    BenchmarkConfig, DistanceMetric, ExecutionMode, GraphConfig, GraphSharing, RouteError,
};

#[test]
fn test_distance_metric_default() {
    assert_eq!(DistanceMetric::default(), DistanceMetric::Geodesic);
}

#[test]
fn test_distance_metric_from_str() {
    assert_eq!("haversine".parse::<DistanceMetric>().unwrap(), DistanceMetric::Haversine);
    assert_eq!("HAVERSINE".parse::<DistanceMetric>().unwrap(), DistanceMetric::Haversine);
    assert_eq!(" geodesic ".parse::<DistanceMetric>().unwrap(), DistanceMetric::Geodesic);
    assert_eq!("sphere".parse::<DistanceMetric>().unwrap(), DistanceMetric::Haversine);
}

#[test]
fn test_unknown_distance_metric_is_rejected() {
    match "manhattan".parse::<DistanceMetric>() {
        Err(RouteError::UnknownMetric { name }) => assert_eq!(name, "manhattan"),
        other => panic!("expected UnknownMetric, got {other:?}"),
    }
    assert!("".parse::<DistanceMetric>().is_err());
}

#[test]
fn test_distance_metric_serde() {
    assert_eq!(serde_json::to_string(&DistanceMetric::Haversine).unwrap(), r#""haversine""#);
    let parsed: DistanceMetric = serde_json::from_str(r#""geodesic""#).unwrap();
    assert_eq!(parsed, DistanceMetric::Geodesic);
}

#[test]
fn test_config_defaults() {
    let graph_config = GraphConfig::default();
    assert_eq!(graph_config.neighbors, 3);
    assert_eq!(graph_config.metric, DistanceMetric::Geodesic);

    let benchmark_config = BenchmarkConfig::default();
    assert_eq!(benchmark_config.repeats, 10_000);
    assert_eq!(benchmark_config.mode, ExecutionMode::Sequential);
    assert_eq!(benchmark_config.sharing, GraphSharing::Shared);
}

#[test]
fn test_execution_mode_serde() {
    let parallel = ExecutionMode::Parallel { workers: 4 };

    let json = serde_json::to_string(&parallel).unwrap();
    assert_eq!(json, r#"{"kind":"parallel","workers":4}"#);

    let parsed: ExecutionMode = serde_json::from_str(r#"{"kind":"sequential"}"#).unwrap();
    assert_eq!(parsed, ExecutionMode::Sequential);
}

#[test]
fn test_benchmark_config_round_trips_through_json() {
    let config = BenchmarkConfig::parallel(500, 2, GraphSharing::Replicated);

    let json = serde_json::to_string(&config).unwrap();
    let parsed: BenchmarkConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, config);
}
