//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, ListArgs, RenderArgs, SanitizeArgs, WalkArgs,
};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
