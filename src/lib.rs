//! Waymark - workflow stepper rendering with allow-listed label markup.
//!
//! A stepper shows an ordered list of workflow steps, each classified
//! against a selected index owned by the caller. Step labels may carry a
//! small set of inline markup; everything outside that set is removed
//! before a label reaches a document.
//!
//! # Modules
//!
//! - [`steps`] - Step model, classification, and activation
//! - [`sanitize`] - Allow-list label sanitizer
//! - [`render`] - Composition plus HTML, text, and JSON renderers
//! - [`options`] - Display options and the options panel
//! - [`actions`] - Typed filter actions over explicit subscriptions
//! - [`config`] - Workflow configuration loading, merging, and validation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output, prompts, and themes
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use waymark::render::compose;
//! use waymark::steps::{Classification, Step};
//!
//! let steps = vec![
//!     Step::new("<span class=\"bold\">Plan</span>"),
//!     Step::new("<script>alert(1)</script>Build"),
//!     Step::unnamed(),
//! ];
//! let rendered = compose(&steps, 1);
//!
//! assert_eq!(rendered[0].classification, Classification::Completed);
//! assert_eq!(rendered[1].classification, Classification::Current);
//! assert_eq!(rendered[1].label, "Build");
//! assert_eq!(rendered[2].label, "&nbsp;");
//! ```
//!
//! For file-based config loading, see the integration tests.

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod options;
pub mod render;
pub mod sanitize;
pub mod steps;
pub mod ui;

pub use error::{Result, WaymarkError};
