//! Workflow step definition.

use serde::{Deserialize, Serialize};

/// One stage of a workflow.
///
/// A step's position is implicit: it is its index in the ordered sequence
/// that holds it. The name is a display label and may contain inline
/// markup, so it must go through [`crate::sanitize::sanitize`] before it is
/// injected anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    /// Display label, possibly absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Step {
    /// Create a step with a label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Create a step without a label.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Borrow the raw, unsanitized label.
    pub fn raw_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<&str> for Step {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
