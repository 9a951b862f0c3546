use citypath_core::{BenchmarkResult, Graph, NameLookup, find_node_id, run_benchmark};

use crate::args::Args;
use crate::error::CliError;

pub struct SearchRequest {
    pub from_name: String,
    pub to_name: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub benchmark: BenchmarkResult,
    pub display_options: Args,
}

/// Resolves the user's spelling of both cities to the names stored in the graph.
pub fn create_search_request(
    args: Args,
    name_lookup: &NameLookup,
    graph: &Graph,
) -> Result<SearchRequest, CliError> {
    let from_query = args.from.as_deref().ok_or(CliError::MissingCity("starting"))?;
    let to_query = args.to.as_deref().ok_or(CliError::MissingCity("destination"))?;

    let from_node = find_node_id(from_query, name_lookup, graph)?;
    let to_node = find_node_id(to_query, name_lookup, graph)?;

    Ok(SearchRequest {
        from_name: graph.name(from_node).to_string(),
        to_name: graph.name(to_node).to_string(),
        search_args: args,
    })
}

pub fn execute_search(request: SearchRequest, graph: &Graph) -> Result<SearchResult, CliError> {
    let benchmark = run_benchmark(
        graph,
        &request.from_name,
        &request.to_name,
        &request.search_args.benchmark_config(),
    )?;

    Ok(SearchResult {
        benchmark,
        display_options: request.search_args,
    })
}
