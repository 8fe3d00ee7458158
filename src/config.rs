// YAML configuration for the tasklog binary

use crate::task::DEFAULT_TIMESTAMP_FORMAT;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE: &str = "tasklog.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Colorize rendered output
    #[serde(default = "default_color")]
    pub color: bool,
    /// chrono format string for task timestamps
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Prompt shown before each command
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_color() -> bool {
    true
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: default_color(),
            timestamp_format: default_timestamp_format(),
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Default location: `<config_dir>/tasklog/tasklog.yml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tasklog").join(CONFIG_FILE))
    }

    /// Load config from an explicit path, or the default path if none given
    ///
    /// A missing file yields defaults. A file that exists but does not parse
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            debug!(path = ?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).context(format!("Failed to read config file {:?}", path))?;
        let config: Config =
            serde_yaml::from_str(&content).context(format!("Failed to parse config file {:?}", path))?;

        debug!(path = ?path, ?config, "Loaded config");
        Ok(config)
    }
}
