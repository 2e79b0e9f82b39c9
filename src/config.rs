// src/config.rs

use crate::cli::Cli;
use crate::core::query::GroupBy;
use crate::error::{Error, Result};
use crate::logging::project_directory;
use directories::UserDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE: &str = "config.toml";

/// User settings. Every field is optional in the file; missing ones keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where exported reports are written.
    pub export_dir: PathBuf,
    pub group_by: GroupBy,
    /// Number of open ports previewed next to each host in the list.
    pub preview_ports: usize,
    pub show_logs: bool,
    /// How many log lines the log panel keeps.
    pub log_tail: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            group_by: GroupBy::None,
            preview_ports: 3,
            show_logs: false,
            log_tail: 200,
        }
    }
}

fn default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_config_path() -> Option<PathBuf> {
    project_directory().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

impl Config {
    /// Loads settings from `explicit` if given, else from the default config
    /// path when that file exists. An explicit path that cannot be read is an
    /// error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No config file found, using defaults.");
                    return Ok(Config::default());
                }
            },
        };

        let text = std::fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&text, &path)?;
        info!(path = %path.display(), "Loaded configuration.");
        Ok(config)
    }

    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Command-line flags take precedence over file settings.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(group_by) = cli.group_by {
            self.group_by = group_by;
        }
        if let Some(dir) = &cli.output {
            self.export_dir = dir.clone();
        }
        if cli.show_logs {
            self.show_logs = true;
        }
    }
}
