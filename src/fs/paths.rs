//! Path resolution utilities for cherrypr
//!
//! Provides functions to locate the repository root and the config file.

use std::path::{Path, PathBuf};

use crate::errors::{CherryprError, Result};

/// Name of the optional per-repository config file
pub const CONFIG_FILE_NAME: &str = ".cherrypr.json";

/// Find the repository root, the nearest directory containing `.git`.
///
/// Walks up the directory tree from the starting directory. `.git` may be a
/// directory or, for worktrees and submodules, a file.
///
/// # Errors
/// * `RepoNotFound` - If the path cannot be resolved or no `.git` is found
pub fn find_repo_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| CherryprError::RepoNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if current.join(".git").exists() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(CherryprError::RepoNotFound(
                    "Could not find a .git directory".to_string(),
                ));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the config file.
pub fn get_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}
