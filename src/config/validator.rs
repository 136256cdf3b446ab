//! Configuration validation.
//!
//! Validation collects every issue rather than stopping at the first one.
//! A selection outside a workflow's steps is legal (it simply renders with
//! no current step), so it is reported as a warning, not an error.

use std::fmt;

use crate::config::schema::WaymarkConfig;
use crate::error::{Result, WaymarkError};

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The config cannot be used.
    Error,
    /// The config works but probably not as intended.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A validation issue with context.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Rule identifier
    pub rule: String,
    /// Human-readable message
    pub message: String,
    /// Workflow the issue belongs to
    pub workflow: Option<String>,
    /// Severity
    pub severity: Severity,
}

/// Validate a configuration and return every issue found.
pub fn validate_config(config: &WaymarkConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (name, workflow) in &config.workflows {
        if name.trim().is_empty() {
            issues.push(ValidationIssue {
                rule: "empty-workflow-name".to_string(),
                message: "Workflow names must not be empty".to_string(),
                workflow: Some(name.clone()),
                severity: Severity::Error,
            });
        }

        if workflow.steps.is_empty() {
            issues.push(ValidationIssue {
                rule: "empty-workflow".to_string(),
                message: format!("Workflow '{}' has no steps", name),
                workflow: Some(name.clone()),
                severity: Severity::Warning,
            });
        }

        if let Some(selected) = workflow.selected {
            let len = i64::try_from(workflow.steps.len()).unwrap_or(i64::MAX);
            if selected < 0 || selected >= len {
                issues.push(ValidationIssue {
                    rule: "selection-out-of-range".to_string(),
                    message: format!(
                        "Workflow '{}' selects step {} but has {} step(s); no step will be current",
                        name, selected, len
                    ),
                    workflow: Some(name.clone()),
                    severity: Severity::Warning,
                });
            }
        }
    }

    issues
}

/// Validate and fail on errors; warnings are returned for display.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any error-severity issue is found.
pub fn validate(config: &WaymarkConfig) -> Result<Vec<ValidationIssue>> {
    let (errors, warnings): (Vec<_>, Vec<_>) = validate_config(config)
        .into_iter()
        .partition(|issue| issue.severity == Severity::Error);

    if errors.is_empty() {
        Ok(warnings)
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(WaymarkError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
