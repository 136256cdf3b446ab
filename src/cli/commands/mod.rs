//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that read workflows share
//! a [`CommandContext`] for locating, loading, and validating configuration.

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod render;
pub mod sanitize;
pub mod walk;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
