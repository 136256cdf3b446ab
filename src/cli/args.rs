//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::render::Format;

/// Waymark - workflow stepper rendering.
#[derive(Debug, Parser)]
#[command(name = "waymark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .waymark/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a workflow's stepper (default if no command specified)
    Render(RenderArgs),

    /// Sanitize a step label
    Sanitize(SanitizeArgs),

    /// List workflows
    List(ListArgs),

    /// Step through a workflow interactively
    Walk(WalkArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RenderArgs {
    /// Workflow to render
    #[arg(short, long)]
    pub workflow: Option<String>,

    /// Selected step index (any integer; out of range means no current step)
    #[arg(short, long, allow_negative_numbers = true)]
    pub selected: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Arguments for the `sanitize` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SanitizeArgs {
    /// Label to sanitize (reads stdin when omitted)
    pub label: Option<String>,

    /// Strip all markup and print plain text
    #[arg(long)]
    pub plain: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `walk` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WalkArgs {
    /// Workflow to walk
    #[arg(short, long)]
    pub workflow: Option<String>,

    /// Step to start from
    #[arg(short, long, allow_negative_numbers = true)]
    pub selected: Option<i64>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
