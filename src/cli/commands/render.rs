//! Render command implementation.
//!
//! The `waymark render` command draws a workflow's stepper as HTML,
//! terminal text, or JSON.

use tracing::debug;

use crate::cli::args::RenderArgs;
use crate::config::{WaymarkConfig, WorkflowConfig};
use crate::error::Result;
use crate::options::DisplayOptions;
use crate::render::html::render_html;
use crate::render::text::{MarkerStyle, TextRenderer};
use crate::render::{compose, to_json, Format};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult, EXIT_NO_CONFIG};

/// The render command implementation.
pub struct RenderCommand {
    context: CommandContext,
    args: RenderArgs,
}

impl RenderCommand {
    /// Create a new render command.
    pub fn new(context: CommandContext, args: RenderArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RenderArgs {
        &self.args
    }
}

/// Selection for a render: the CLI value, else the workflow default, else 0.
pub(crate) fn effective_selection(explicit: Option<i64>, workflow: &WorkflowConfig) -> i64 {
    explicit.or(workflow.selected).unwrap_or(0)
}

/// Draw `workflow` as terminal text through `ui`.
pub(crate) fn show_text(
    ui: &mut dyn UserInterface,
    config: &WaymarkConfig,
    name: &str,
    workflow: &WorkflowConfig,
    selected: i64,
    options: DisplayOptions,
) {
    let markers = if ui.is_interactive() {
        MarkerStyle::Icons
    } else {
        MarkerStyle::Bracketed
    };
    let renderer = TextRenderer::new(
        ui.theme().clone(),
        markers,
        workflow.orientation(&config.settings),
    )
    .with_options(options);

    ui.show_header(config.title(name));
    if let Some(ref desc) = workflow.description {
        let line = format!("  {}", ui.theme().dim.apply_to(desc));
        ui.message(&line);
    }
    for line in renderer.render(&compose(&workflow.steps, selected)) {
        ui.output(&line);
    }
}

impl Command for RenderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.context.load(ui)? else {
            return Ok(CommandResult::failure(EXIT_NO_CONFIG));
        };

        let (name, workflow) = config.workflow(self.args.workflow.as_deref())?;
        let selected = effective_selection(self.args.selected, workflow);
        debug!(workflow = name, selected, format = %self.args.format, "rendering workflow");

        match self.args.format {
            Format::Html => {
                let steps = compose(&workflow.steps, selected);
                let markup = render_html(&steps, workflow.orientation(&config.settings));
                ui.output(markup.trim_end());
            }
            Format::Json => {
                let steps = compose(&workflow.steps, selected);
                ui.output(&to_json(&steps)?);
            }
            Format::Text => {
                show_text(
                    ui,
                    &config,
                    name,
                    workflow,
                    selected,
                    config.settings.display,
                );
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaymarkError;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
app_name: Release pipeline
workflows:
  release:
    description: Ship a release
    selected: 1
    steps:
      - name: "<span class=\"bold\">Plan</span>"
      - name: "<script>alert(1)</script>Build"
      - {}
"#;

    fn setup(content: &str) -> (TempDir, CommandContext) {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".waymark");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), content).unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        (temp, ctx)
    }

    fn args(format: Format, selected: Option<i64>) -> RenderArgs {
        RenderArgs {
            workflow: None,
            selected,
            format,
        }
    }

    #[test]
    fn renders_html_with_sanitized_labels() {
        let (_temp, ctx) = setup(CONFIG);
        let mut ui = MockUI::new();

        let result = RenderCommand::new(ctx, args(Format::Html, None))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        let html = &ui.outputs()[0];
        assert!(html.starts_with("<ol class=\"stepper\">"));
        assert!(html.contains("class=\"is-lower show-bar\" data-step=\" \" data-index=\"0\"><span class=\"bold\">Plan</span>"));
        assert!(html.contains("class=\"is-current\" data-step=\" \" data-index=\"1\">Build</li>"));
        assert!(html.contains("data-index=\"2\">&nbsp;</li>"));
        assert!(!html.contains("script"));
    }

    #[test]
    fn renders_json() {
        let (_temp, ctx) = setup(CONFIG);
        let mut ui = MockUI::new();

        RenderCommand::new(ctx, args(Format::Json, Some(-1)))
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.outputs()[0]).unwrap();
        let steps = value.as_array().unwrap();
        assert_eq!(steps.len(), 3);
        assert!(steps
            .iter()
            .all(|s| s["classification"] == "upcoming"));
    }

    #[test]
    fn renders_text_with_bracketed_markers_when_not_interactive() {
        let (_temp, ctx) = setup(CONFIG);
        let mut ui = MockUI::new();

        RenderCommand::new(ctx, args(Format::Text, Some(2)))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.headers(), ["Release pipeline"]);
        assert!(ui.has_message("Ship a release"));
        assert_eq!(ui.outputs(), ["[done] Plan ─ [done] Build ─ [now] 3"]);
    }

    #[test]
    fn uses_workflow_default_selection() {
        let (_temp, ctx) = setup(CONFIG);
        let mut ui = MockUI::new();

        RenderCommand::new(ctx, args(Format::Json, None))
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.outputs()[0]).unwrap();
        assert_eq!(value[1]["classification"], "current");
    }

    #[test]
    fn missing_config_exits_with_code_2() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        let mut ui = MockUI::new();

        let result = RenderCommand::new(ctx, RenderArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("No configuration found"));
    }

    #[test]
    fn unknown_workflow_is_an_error() {
        let (_temp, ctx) = setup(CONFIG);
        let mut ui = MockUI::new();
        let args = RenderArgs {
            workflow: Some("deploy".to_string()),
            ..Default::default()
        };

        let err = RenderCommand::new(ctx, args).execute(&mut ui).unwrap_err();
        assert!(matches!(err, WaymarkError::UnknownWorkflow { name } if name == "deploy"));
    }

    #[test]
    fn explicit_config_path_is_used() {
        let temp = TempDir::new().unwrap();
        let path: PathBuf = temp.path().join("steps.yml");
        fs::write(&path, "workflows:\n  default:\n    steps:\n      - name: Only\n").unwrap();
        let ctx = CommandContext::new(temp.path(), Some(path));
        let mut ui = MockUI::new();

        RenderCommand::new(ctx, args(Format::Text, None))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.outputs(), ["[now] Only"]);
    }

    #[test]
    fn effective_selection_prefers_explicit_value() {
        let workflow = WorkflowConfig {
            selected: Some(3),
            ..Default::default()
        };
        assert_eq!(effective_selection(Some(-2), &workflow), -2);
        assert_eq!(effective_selection(None, &workflow), 3);
        assert_eq!(effective_selection(None, &WorkflowConfig::default()), 0);
    }
}
