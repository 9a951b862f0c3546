use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Point set is empty")]
    EmptyPointSet,

    #[error("Duplicate point name: '{name}'")]
    DuplicatePoint { name: String },

    #[error("Invalid coordinate for '{name}': ({lat}, {lng})")]
    InvalidCoordinate { name: String, lat: f64, lng: f64 },

    #[error("Unknown distance metric '{name}' (expected geodesic or haversine)")]
    UnknownMetric { name: String },

    #[error("Neighbor count must be at least 1")]
    InvalidNeighborCount,

    #[error("'{name}' is not a known location")]
    UnknownNode { name: String },

    #[error("Start and destination must be different (both are '{name}')")]
    SameEndpoints { name: String },

    #[error("Repeat count must be at least 1")]
    InvalidRepeatCount,

    #[error("Concurrency failure: {reason}")]
    ConcurrencyFailure { reason: String },

    #[error("Graph snapshot error: {0}")]
    Snapshot(#[from] std::io::Error),
}

impl RouteError {
    /// True for errors caused by the caller's arguments rather than by execution.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(
            self,
            RouteError::ConcurrencyFailure { .. } | RouteError::Snapshot(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
