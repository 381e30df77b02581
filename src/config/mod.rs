//! Persisted configuration for the branch flow.
//!
//! The only remembered value is the main branch name. It lives in a small
//! JSON file in the user's home directory (`~/.cli-config.json`) and is
//! rewritten in full whenever it changes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// File name of the configuration file inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".cli-config.json";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "BRANCHOUT_CONFIG_PATH";

/// Configuration persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// The branch new branches are cut from (e.g. `main`, `master`, `develop`).
    #[serde(
        rename = "mainBranch",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub main_branch: Option<String>,
}

impl CliConfig {
    /// Loads the configuration from disk.
    ///
    /// A missing file yields the default (empty) configuration. A file that
    /// exists but is not valid JSON is an error.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", config_path.display()))?;

        Ok(config)
    }

    /// Persists the whole configuration, pretty-printed, overwriting the file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Resolves the configuration file path
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(custom_path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(custom_path));
        }

        Ok(dirs::home_dir()
            .context("Failed to get user home directory")?
            .join(CONFIG_FILE_NAME))
    }
}
