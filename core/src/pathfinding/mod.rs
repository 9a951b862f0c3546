pub mod bfs;
pub mod utils;

pub use bfs::{bfs_between, bfs_find_path, bfs_search, resolve_endpoints};
pub use utils::{PathResult, PathStep, Route};
