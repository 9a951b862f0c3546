use citypath_core::RouteError;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the city data file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Data file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a JSON array of cities: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record {position}: {reason}")]
    InvalidRecord { position: usize, reason: String },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("Missing {0} city")]
    MissingCity(&'static str),
}
