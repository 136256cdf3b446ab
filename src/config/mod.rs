//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging of the local override in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use waymark::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".waymark");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("config.yml"),
//!     "workflows:\n  release:\n    steps:\n      - name: Plan\n      - name: Ship\n",
//! )
//! .unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert!(validate(&config).unwrap().is_empty());
//! assert_eq!(config.workflows["release"].steps.len(), 2);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.waymark/config.yml`)
//! 2. Local overrides (`.waymark/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{Settings, WaymarkConfig, WorkflowConfig, DEFAULT_WORKFLOW};

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR, CONFIG_FILE, LOCAL_CONFIG_FILE,
};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, Severity, ValidationIssue};
