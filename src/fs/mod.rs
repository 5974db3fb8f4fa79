//! File system utilities for cherrypr
//!
//! Provides repository-root discovery and JSON config reading.

mod json;
mod paths;

pub use json::{read_config, read_json};
pub use paths::{find_repo_root, get_config_path, resolve_cwd, CONFIG_FILE_NAME};
