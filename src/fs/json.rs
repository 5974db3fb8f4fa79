//! JSON file reading with serde validation

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::{CherryprError, Result};
use crate::schemas::Config;

use super::paths::get_config_path;

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CherryprError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            CherryprError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        CherryprError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Read the config file for a repository.
///
/// Returns the default config if the file doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}
