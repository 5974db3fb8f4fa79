//! Config schema - Configuration for cherrypr

use serde::{Deserialize, Serialize};

/// Main configuration for cherrypr
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote to inspect, fetch from and push to
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Base of the comparison URL (e.g., "https://github.com")
    #[serde(default = "default_web_url")]
    pub web_url: String,

    /// Open the comparison URL in the browser once the branch is pushed
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_web_url() -> String {
    "https://github.com".to_string()
}

fn default_open_browser() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            web_url: default_web_url(),
            open_browser: default_open_browser(),
        }
    }
}
