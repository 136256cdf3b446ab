//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//! - Theme and step markers for terminal rendering
//!
//! # Example
//!
//! ```
//! use waymark::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Release");
//! ui.output("◆ Plan");
//! ```

pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use icons::StepMarker;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_select;
pub use terminal::{create_ui, is_ci, TerminalUI};
pub use theme::{should_use_colors, WaymarkTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode (e.g. from config defaults).
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Write primary output, such as a rendered stepper, to stdout.
    fn output(&mut self, text: &str);

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask the user to pick one option; returns the option's value.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Theme for styling terminal output.
    fn theme(&self) -> &WaymarkTheme;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A select prompt.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and test responses).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Options to choose from.
    pub options: Vec<PromptOption>,
    /// Value of the option selected by default.
    pub default: Option<String>,
}

/// An option in a select prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

impl PromptOption {
    /// Create an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
