use crate::error::{CliError, LoadError};
use crate::parsing::parse_points;
use citypath_core::{Graph, GraphConfig, NameLookup, build_graph, build_name_lookup};
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_DATA_PATH: &str = "data/cities.json";

pub struct CityPathApp {
    pub data_path: PathBuf,
}

impl CityPathApp {
    /// `data_path` comes from `--data` or `CITYPATH_DATA`; falls back to
    /// [`DEFAULT_DATA_PATH`].
    pub fn new(data_path: Option<String>) -> Result<Self, LoadError> {
        let data_path = PathBuf::from(data_path.unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()));

        if !data_path.exists() {
            return Err(LoadError::MissingFile { path: data_path });
        }

        Ok(Self { data_path })
    }

    pub fn load_data(&self, config: &GraphConfig) -> Result<(Graph, NameLookup), CliError> {
        let points = parse_points(&self.data_path)?;
        info!(cities = points.len(), path = %self.data_path.display(), "loaded city data");

        let graph = build_graph(points, config)?;
        let name_lookup = build_name_lookup(&graph);

        Ok((graph, name_lookup))
    }
}
