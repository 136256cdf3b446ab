//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for locating and loading configuration
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RenderArgs};
use crate::config::{load_config, validate, WaymarkConfig};
use crate::error::{Result, WaymarkError};
use crate::ui::{OutputMode, UserInterface};

/// Exit code used when no configuration could be found.
pub const EXIT_NO_CONFIG: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where commands find their configuration.
#[derive(Debug, Clone)]
pub struct CommandContext {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandContext {
    /// Create a context for a project root and optional explicit config file.
    pub fn new(project_root: impl Into<PathBuf>, config_path: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config_path,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load and validate configuration.
    ///
    /// Returns `Ok(None)` after reporting to the UI when no configuration
    /// exists. Validation warnings are shown; the config's default output
    /// mode is applied when no CLI flag changed it.
    pub fn load(&self, ui: &mut dyn UserInterface) -> Result<Option<WaymarkConfig>> {
        let config = match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(config) => config,
            Err(WaymarkError::ConfigNotFound { path }) => {
                ui.error(&format!(
                    "No configuration found at {}. Create .waymark/config.yml or pass --config.",
                    path.display()
                ));
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output);
        }

        for warning in validate(&config)? {
            ui.warning(&warning.message);
        }

        Ok(Some(config))
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Get the command context.
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = self.context.clone();
        match &cli.command {
            Some(Commands::Render(args)) => {
                super::render::RenderCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Sanitize(args)) => {
                super::sanitize::SanitizeCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Walk(args)) => {
                super::walk::WalkCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::render::RenderCommand::new(ctx, RenderArgs::default()).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn context_reports_missing_config() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        let mut ui = MockUI::new();

        assert!(ctx.load(&mut ui).unwrap().is_none());
        assert!(ui.has_error("No configuration found"));
    }

    #[test]
    fn context_applies_default_output_and_shows_warnings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("workflow.yml");
        fs::write(
            &path,
            "settings:\n  default_output: quiet\nworkflows:\n  empty: {}\n",
        )
        .unwrap();
        let ctx = CommandContext::new(temp.path(), Some(path));
        let mut ui = MockUI::new();

        assert!(ctx.load(&mut ui).unwrap().is_some());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert!(ui.has_warning("has no steps"));
    }

    #[test]
    fn context_keeps_explicit_output_mode() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("workflow.yml");
        fs::write(&path, "settings:\n  default_output: silent\n").unwrap();
        let ctx = CommandContext::new(temp.path(), Some(path));
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        ctx.load(&mut ui).unwrap();
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn dispatcher_exposes_context() {
        let dispatcher = CommandDispatcher::new(CommandContext::new("/test", None));
        assert_eq!(dispatcher.context().project_root(), Path::new("/test"));
    }
}
