use crate::domain::DEFAULT_RELEASE_BRANCH;
use crate::error::{ReleaseCheckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// File name looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "releasecheck.toml";

/// Represents the complete configuration for release-check.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_release_branch")]
    pub release_branch: String,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_release_branch() -> String {
    DEFAULT_RELEASE_BRANCH.to_string()
}

/// Configuration for what counts as releasable.
///
/// Does not affect how versions are sequenced, only which findings block a
/// release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Accept a `Caution` sequencing verdict
    #[serde(default)]
    pub allow_caution: bool,

    /// Accept untracked or uncommitted paths in the working tree
    #[serde(default)]
    pub allow_dirty_worktree: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            release_branch: default_release_branch(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ReleaseCheckError::config(e.to_string()))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasecheck.toml` in current directory
/// 3. `.releasecheck.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let path = if let Some(path) = config_path {
        Path::new(path).to_path_buf()
    } else if local.exists() {
        local
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            user_path
        } else {
            debug!("No configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(&path)?;
    Config::from_toml_str(&content)
}
