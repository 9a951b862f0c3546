use citypath::search::{create_search_request, execute_search};
use citypath::{Args, CliError, MetricArg};
use citypath_core::{
    DistanceMetric, ExecutionMode, Graph, GraphSharing, NameLookup, Point, RouteError,
    build_graph, build_name_lookup,
};
use clap::Parser;

fn corner_data(args: &Args) -> (Graph, NameLookup) {
    let points = vec![
        Point::new("Alpha", 0.0, 0.0).unwrap(),
        Point::new("Bravo", 0.0, 1.0).unwrap(),
        Point::new("Charlie", 0.0, 2.0).unwrap(),
        Point::new("Delta", 1.0, 2.0).unwrap(),
        Point::new("Échelon", 2.0, 2.0).unwrap(),
    ];
    let graph = build_graph(points, &args.graph_config()).unwrap();
    let name_lookup = build_name_lookup(&graph);
    (graph, name_lookup)
}

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("citypath").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_args_defaults() {
    let args = parse(&["Alpha", "Delta"]);

    assert_eq!(args.neighbors, 3);
    assert_eq!(args.metric, MetricArg::Geodesic);
    assert_eq!(args.runs, 10_000);
    assert!(!args.parallel);

    let config = args.benchmark_config();
    assert_eq!(config.mode, ExecutionMode::Sequential);
    assert_eq!(config.sharing, GraphSharing::Shared);
}

#[test]
fn test_args_parallel_flags() {
    let args = parse(&[
        "Alpha", "Delta", "--parallel", "-w", "3", "--replicate", "-m", "haversine", "-k", "2",
    ]);

    let config = args.benchmark_config();
    assert_eq!(config.mode, ExecutionMode::Parallel { workers: 3 });
    assert_eq!(config.sharing, GraphSharing::Replicated);
    assert_eq!(args.graph_config().metric, DistanceMetric::Haversine);
    assert_eq!(args.graph_config().neighbors, 2);
}

#[test]
fn test_args_worker_options_need_parallel() {
    assert!(Args::try_parse_from(["citypath", "Alpha", "Delta", "-w", "2"]).is_err());
    assert!(Args::try_parse_from(["citypath", "Alpha", "Delta", "--replicate"]).is_err());
    assert!(Args::try_parse_from(["citypath", "Alpha", "Delta", "-p", "--replicate"]).is_ok());

    let args = parse(&["Alpha", "Delta", "--parallel"]);
    assert_eq!(args.workers, None);
    assert_eq!(args.benchmark_config().mode, ExecutionMode::Parallel { workers: 0 });
}

#[test]
fn test_args_require_cities_unless_listing() {
    assert!(Args::try_parse_from(["citypath", "Alpha"]).is_err());
    assert!(Args::try_parse_from(["citypath", "--list"]).is_ok());
}

#[test]
fn test_search_resolves_fuzzy_names() {
    let args = parse(&["  alpha ", "echelon", "-k", "2", "-r", "25"]);
    let (graph, name_lookup) = corner_data(&args);

    let request = create_search_request(args, &name_lookup, &graph).unwrap();

    assert_eq!(request.from_name, "Alpha");
    assert_eq!(request.to_name, "Échelon");
}

#[test]
fn test_search_runs_benchmark() {
    let args = parse(&["Alpha", "Échelon", "-k", "2", "-r", "25"]);
    let (graph, name_lookup) = corner_data(&args);

    let request = create_search_request(args, &name_lookup, &graph).unwrap();
    let result = execute_search(request, &graph).unwrap();

    let route = result.benchmark.path.as_ref().unwrap();
    assert_eq!(route.names(&graph), vec!["Alpha", "Charlie", "Échelon"]);
    assert_eq!(result.benchmark.repeats, 25);
}

#[test]
fn test_search_parallel_matches_sequential() {
    let args = parse(&["Alpha", "Échelon", "-k", "2", "-r", "40", "-p", "-w", "2"]);
    let (graph, name_lookup) = corner_data(&args);

    let request = create_search_request(args, &name_lookup, &graph).unwrap();
    let result = execute_search(request, &graph).unwrap();

    let route = result.benchmark.path.as_ref().unwrap();
    assert_eq!(route.names(&graph), vec!["Alpha", "Charlie", "Échelon"]);
    assert_eq!(result.benchmark.workers, 2);
}

#[test]
fn test_search_unknown_city() {
    let args = parse(&["Alpha", "Zulu"]);
    let (graph, name_lookup) = corner_data(&args);

    let result = create_search_request(args, &name_lookup, &graph);

    assert!(matches!(
        result,
        Err(CliError::Route(RouteError::UnknownNode { .. }))
    ));
}

#[test]
fn test_search_same_city_is_rejected() {
    let args = parse(&["Delta", "DELTA", "-r", "5"]);
    let (graph, name_lookup) = corner_data(&args);

    let request = create_search_request(args, &name_lookup, &graph).unwrap();
    let result = execute_search(request, &graph);

    assert!(matches!(
        result,
        Err(CliError::Route(RouteError::SameEndpoints { .. }))
    ));
}

#[test]
fn test_search_zero_runs_is_rejected() {
    let args = parse(&["Alpha", "Delta", "-r", "0"]);
    let (graph, name_lookup) = corner_data(&args);

    let request = create_search_request(args, &name_lookup, &graph).unwrap();

    assert!(matches!(
        execute_search(request, &graph),
        Err(CliError::Route(RouteError::InvalidRepeatCount))
    ));
}
