use citypath::colors::ColorScheme;
use citypath::display::{display_city_list, display_search_info, display_search_results};
use citypath::json_output::{create_json_output, print_json_output};
use citypath::logging::init_logging;
use citypath::search::{create_search_request, execute_search};
use citypath::{Args, CityPathApp, CliError};
use clap::Parser;

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);
    init_logging(args.verbose);

    if let Err(error) = run(args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(1);
    }
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), CliError> {
    let app = CityPathApp::new(args.data.clone())?;
    let (graph, name_lookup) = app.load_data(&args.graph_config())?;

    if args.list {
        display_city_list(&graph, colors);
        return Ok(());
    }

    let search_request = create_search_request(args, &name_lookup, &graph)?;

    let json_mode = search_request.search_args.json;
    if search_request.search_args.verbose && !json_mode {
        display_search_info(&search_request, &graph, colors);
    }

    let search_result = execute_search(search_request, &graph)?;

    if json_mode {
        let json_output =
            create_json_output(&search_result.benchmark, &search_result.display_options, &graph);
        print_json_output(&json_output);
    } else {
        display_search_results(search_result, &graph, colors);
    }

    Ok(())
}
