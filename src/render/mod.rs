//! Composition of steps into renderable records, and the renderers.
//!
//! - [`compose`] - classify and sanitize every step in one pass
//! - [`html`] - `<ol class="stepper">` markup
//! - [`text`] - terminal lines
//! - [`to_json`] - machine-readable output
//!
//! # Example
//!
//! ```
//! use waymark::render::{compose, html::render_html, Orientation};
//! use waymark::steps::Step;
//!
//! let steps = vec![Step::new("Plan"), Step::new("<b>Ship</b>")];
//! let rendered = compose(&steps, 0);
//! let markup = render_html(&rendered, Orientation::Horizontal);
//! assert!(markup.contains("<li class=\"is-current\""));
//! assert!(!markup.contains("<b>"));
//! ```

pub mod html;
pub mod text;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WaymarkError};
use crate::sanitize::sanitize;
use crate::steps::{classify, Classification, Step};

/// One step, ready to draw.
///
/// `label` is already sanitized and safe to inject as markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedStep {
    /// Index of the step in its workflow.
    pub position: usize,
    /// Standing relative to the selection.
    pub classification: Classification,
    /// Sanitized label markup.
    pub label: String,
}

/// Layout direction of a stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Steps laid out left to right.
    #[default]
    Horizontal,
    /// Steps stacked top to bottom.
    Vertical,
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(format!("unknown orientation: {}", s)),
        }
    }
}

/// Output format for a rendered stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// HTML markup.
    Html,
    /// Terminal text.
    #[default]
    Text,
    /// JSON array of rendered steps.
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Html => "html",
            Self::Text => "text",
            Self::Json => "json",
        };
        f.write_str(s)
    }
}

/// Classify and sanitize every step.
///
/// Output order matches input order and nothing is retained between calls.
pub fn compose(steps: &[Step], selected: i64) -> Vec<RenderedStep> {
    debug!(steps = steps.len(), selected, "composing stepper");
    classify(steps, selected)
        .into_iter()
        .zip(steps)
        .enumerate()
        .map(|(position, (classification, step))| RenderedStep {
            position,
            classification,
            label: sanitize(step.raw_name()),
        })
        .collect()
}

/// Serialize rendered steps as pretty JSON.
pub fn to_json(steps: &[RenderedStep]) -> Result<String> {
    serde_json::to_string_pretty(steps).map_err(|e| WaymarkError::Other(e.into()))
}
