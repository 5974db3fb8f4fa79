//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{CherryprError, Result};
use crate::fs;
use crate::schemas::Config;

/// Load configuration for the repository containing `cwd`.
///
/// Walks up to the repository root and reads `.cherrypr.json` there, merged
/// with defaults. Without a `.git` ancestor the default configuration is
/// returned; the run command rejects such directories before calling this.
pub fn load_config(cwd: &Path) -> Result<Config> {
    let root = match fs::find_repo_root(cwd) {
        Ok(root) => root,
        Err(CherryprError::RepoNotFound(reason)) => {
            tracing::debug!("No repository root found ({}), using default config", reason);
            return Ok(Config::default());
        }
        Err(e) => return Err(e),
    };

    let config = fs::read_config(&root)?;
    if config.remote.trim().is_empty() {
        return Err(CherryprError::ConfigError(
            "remote must not be empty".to_string(),
        ));
    }
    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}
