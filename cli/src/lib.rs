pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod error;
pub mod json_output;
pub mod logging;
pub mod parsing;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::CityPathApp;
pub use args::{Args, MetricArg};
pub use error::{CliError, LoadError};
pub use parsing::{CityRecord, Degrees, parse_points, records_to_points};
pub use utils::format_number;
