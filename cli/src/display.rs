use citypath_core::lookup::sorted_names;
use citypath_core::{ExecutionMode, Graph, GraphSharing, LatencyKind, Route};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::{format_km, format_ms, format_number};

pub fn display_search_info(request: &SearchRequest, graph: &Graph, colors: &ColorScheme) {
    let args = &request.search_args;
    let config = args.benchmark_config();

    println!(
        "🗺️  Finding route from {} to {}",
        colors.city_name(&format!("\"{}\"", request.from_name)),
        colors.city_name(&format!("\"{}\"", request.to_name))
    );

    println!(
        "⚙️  {} cities, {} connections ({} nearest neighbors, {} distances)",
        colors.number(&format_number(graph.node_count())),
        colors.number(&format_number(graph.edge_count())),
        colors.number(&args.neighbors.to_string()),
        args.graph_config().metric.as_str()
    );

    match config.mode {
        ExecutionMode::Sequential => println!(
            "🔁 Solving {} times sequentially",
            colors.number(&format_number(config.repeats))
        ),
        ExecutionMode::Parallel { workers } => {
            let worker_label = if workers == 0 {
                "all CPUs".to_string()
            } else {
                format!("{workers} workers")
            };
            let sharing_label = match config.sharing {
                GraphSharing::Shared => "shared graph",
                GraphSharing::Replicated => "one graph copy per worker",
            };
            println!(
                "🔁 Solving {} times in parallel on {} ({})",
                colors.number(&format_number(config.repeats)),
                worker_label,
                sharing_label
            );
        }
    }

    let isolated = graph.isolated_nodes();
    if isolated > 0 {
        println!(
            "{} {} cities have no connections",
            colors.warning("⚠️ "),
            colors.number(&isolated.to_string())
        );
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(result: SearchResult, graph: &Graph, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;
    let benchmark = &result.benchmark;

    if is_verbose {
        println!("\n---\n");
    }

    match &benchmark.path {
        Some(route) => {
            display_successful_path(route, graph, &result.display_options, colors);
            println!();
            println!(
                "{} Average Execution Time over {} runs: {} ms",
                colors.success("Path found!"),
                colors.number(&format_number(benchmark.repeats)),
                colors.number(&format_ms(benchmark.avg_latency_ms()))
            );
        }
        None => {
            println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.city_name(&format!("\"{}\"", benchmark.start)),
                colors.city_name(&format!("\"{}\"", benchmark.goal))
            );
        }
    }

    if benchmark.latency_kind == LatencyKind::AggregateThroughput && !result.display_options.quiet {
        println!(
            "   (aggregate throughput across {} workers, not the latency of a single search)",
            benchmark.workers
        );
    }

    if is_verbose {
        display_search_statistics(&result, colors);
    }
}

fn display_successful_path(route: &Route, graph: &Graph, display_options: &Args, colors: &ColorScheme) {
    if display_options.verbose {
        println!(
            "{} Found route with {} hops:\n",
            colors.success("✅"),
            colors.number(&route.hops().to_string())
        );
    }

    // Show path flow first
    let path_flow = route
        .names(graph)
        .into_iter()
        .map(|name| colors.city_name(name).to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", path_flow);

    // Show detailed list only if not in quiet mode
    if !display_options.quiet {
        println!();
        for (step_index, &(node, leg_km)) in route.steps().iter().enumerate() {
            let step_number = format!("{}.", step_index + 1);
            println!(
                "{}",
                format_path_step(step_number, graph.name(node), leg_km, step_index, colors)
            );
        }
        println!(
            "\n{} {}",
            colors.stats("Total distance:"),
            colors.number(&format_km(route.total_km()))
        );
    }
}

fn format_path_step(
    step_number: String,
    city_name: &str,
    leg_km: f64,
    step_index: usize,
    colors: &ColorScheme,
) -> String {
    let mut formatted_line = format!(
        "{:3} {}",
        colors.step_number(&step_number),
        colors.city_name(&format!("\"{}\"", city_name))
    );

    if step_index > 0 {
        formatted_line.push_str(&format!(
            " {}",
            colors.distance(&format!("(+{})", format_km(leg_km)))
        ));
    }

    formatted_line
}

fn display_search_statistics(result: &SearchResult, colors: &ColorScheme) {
    let benchmark = &result.benchmark;
    println!("\n---\n");
    println!(
        "{} {} searches in {} ms on {} worker(s), {} searches/sec",
        colors.stats("📊"),
        colors.number(&format_number(benchmark.repeats)),
        colors.number(&format_ms(benchmark.total_time_ms())),
        colors.number(&benchmark.workers.to_string()),
        colors.number(&format_number(benchmark.searches_per_second() as usize))
    );
}

pub fn display_city_list(graph: &Graph, colors: &ColorScheme) {
    for name in sorted_names(graph) {
        println!("{}", colors.city_name(name));
    }
}
