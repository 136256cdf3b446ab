//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::merger::merge_configs;
use crate::config::schema::WaymarkConfig;
use crate::error::{Result, WaymarkError};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".waymark";

/// Project config file name.
pub const CONFIG_FILE: &str = "config.yml";

/// Local override file name, merged over the project config.
pub const LOCAL_CONFIG_FILE: &str = "config.local.yml";

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .waymark/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .waymark/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join(CONFIG_FILE)),
            project_local: existing(project_root.join(CONFIG_DIR).join(LOCAL_CONFIG_FILE)),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if the project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// A directory containing `.waymark/` wins; a `.git` entry is the fallback.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WaymarkError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WaymarkError::Io(e)
        }
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<WaymarkConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// `source_path` is used for error reporting only.
pub fn parse_config(content: &str, source_path: &Path) -> Result<WaymarkConfig> {
    if content.trim().is_empty() {
        return Ok(WaymarkConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| WaymarkError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value, for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;

    serde_yaml::from_str(&content).map_err(|e| WaymarkError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the project config merged with its local override.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no project config exists.
/// Returns `ConfigParseError` if any layer is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<WaymarkConfig> {
    let paths = ConfigPaths::discover(project_root);
    let project_path = project_root.join(CONFIG_DIR).join(CONFIG_FILE);

    if !paths.has_project_config() {
        return Err(WaymarkError::ConfigNotFound { path: project_path });
    }

    let mut layers = Vec::new();
    for path in paths.all_existing() {
        debug!(path = %path.display(), "loading config layer");
        layers.push(load_config_value(path)?);
    }

    let merged = merge_configs(&layers);

    serde_yaml::from_value(merged).map_err(|e| WaymarkError::ConfigParseError {
        path: project_path,
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with an optional path override.
///
/// An explicit path is loaded on its own, without merging.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<WaymarkConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}
