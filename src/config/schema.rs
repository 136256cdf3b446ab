//! Configuration schema.
//!
//! These structs map to the YAML workflow file format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaymarkError};
use crate::options::DisplayOptions;
use crate::render::Orientation;
use crate::steps::Step;
use crate::ui::OutputMode;

/// Name of the workflow used when none is requested and several exist.
pub const DEFAULT_WORKFLOW: &str = "default";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WaymarkConfig {
    /// Application name (for display purposes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Global settings
    pub settings: Settings,

    /// Workflow definitions, keyed by name
    pub workflows: BTreeMap<String, WorkflowConfig>,
}

/// Settings that apply to every workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,

    /// Default layout direction
    pub orientation: Orientation,

    /// Display flags
    pub display: DisplayOptions,
}

/// One workflow: an ordered list of steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Selection used when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<i64>,

    /// Layout direction overriding `settings.orientation`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,

    /// Steps in progression order
    pub steps: Vec<Step>,
}

impl WaymarkConfig {
    /// Resolve a workflow by name.
    ///
    /// Without a name, the only workflow is used if there is exactly one,
    /// otherwise the one named [`DEFAULT_WORKFLOW`].
    pub fn workflow(&self, name: Option<&str>) -> Result<(&str, &WorkflowConfig)> {
        if name.is_none() && self.workflows.len() == 1 {
            if let Some((only, workflow)) = self.workflows.iter().next() {
                return Ok((only.as_str(), workflow));
            }
        }

        let wanted = name.unwrap_or(DEFAULT_WORKFLOW);
        self.workflows
            .get_key_value(wanted)
            .map(|(name, workflow)| (name.as_str(), workflow))
            .ok_or_else(|| WaymarkError::UnknownWorkflow {
                name: wanted.to_string(),
            })
    }

    /// Display title: the app name, or the workflow name.
    pub fn title<'a>(&'a self, workflow: &'a str) -> &'a str {
        self.app_name.as_deref().unwrap_or(workflow)
    }
}

impl WorkflowConfig {
    /// Effective orientation for this workflow.
    pub fn orientation(&self, settings: &Settings) -> Orientation {
        self.orientation.unwrap_or(settings.orientation)
    }
}
