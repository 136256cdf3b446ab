//! List command implementation.
//!
//! The `waymark list` command lists workflows with their step counts.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::{Result, WaymarkError};
use crate::sanitize::plain_text;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult, EXIT_NO_CONFIG};

/// The list command implementation.
pub struct ListCommand {
    context: CommandContext,
    args: ListArgs,
}

/// One workflow in `--json` output.
#[derive(Debug, Serialize)]
struct WorkflowSummary<'a> {
    name: &'a str,
    steps: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<i64>,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(context: CommandContext, args: ListArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.context.load(ui)? else {
            return Ok(CommandResult::failure(EXIT_NO_CONFIG));
        };

        if self.args.json {
            let summaries: Vec<_> = config
                .workflows
                .iter()
                .map(|(name, workflow)| WorkflowSummary {
                    name,
                    steps: workflow.steps.len(),
                    description: workflow.description.as_deref(),
                    selected: workflow.selected,
                })
                .collect();
            let json = serde_json::to_string_pretty(&summaries)
                .map_err(|e| WaymarkError::Other(e.into()))?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        if config.workflows.is_empty() {
            ui.message("No workflows defined.");
            return Ok(CommandResult::success());
        }

        let theme = ui.theme().clone();
        ui.message(&format!("  {}", theme.key.apply_to("Workflows:")));
        for (name, workflow) in &config.workflows {
            let labels: Vec<String> = workflow
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| {
                    let label = plain_text(step.raw_name());
                    if label.is_empty() {
                        format!("{}", i + 1)
                    } else {
                        label
                    }
                })
                .collect();
            let count = match workflow.steps.len() {
                1 => "1 step".to_string(),
                n => format!("{} steps", n),
            };
            ui.output(&format!(
                "    {}{} {} {}",
                theme.highlight.apply_to(name),
                theme.dim.apply_to(":"),
                count,
                theme.dim.apply_to(format!("({})", labels.join(" → "))),
            ));

            if let Some(ref desc) = workflow.description {
                ui.message(&format!("      {}", theme.dim.apply_to(desc)));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup(content: &str) -> (TempDir, CommandContext) {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".waymark");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), content).unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        (temp, ctx)
    }

    const CONFIG: &str = r#"
workflows:
  release:
    description: Ship a release
    steps:
      - name: "<span>Plan</span>"
      - name: Ship
  hotfix:
    selected: 0
    steps:
      - {}
"#;

    #[test]
    fn lists_workflows_with_counts_and_plain_labels() {
        let (_temp, ctx) = setup(CONFIG);
        let mut ui = MockUI::new();

        let result = ListCommand::new(ctx, ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(
            ui.outputs(),
            ["    hotfix: 1 step (1)", "    release: 2 steps (Plan → Ship)"]
        );
        assert!(ui.has_message("Ship a release"));
    }

    #[test]
    fn lists_json() {
        let (_temp, ctx) = setup(CONFIG);
        let mut ui = MockUI::new();

        ListCommand::new(ctx, ListArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.outputs()[0]).unwrap();
        assert_eq!(value[0]["name"], "hotfix");
        assert_eq!(value[0]["selected"], 0);
        assert_eq!(value[1]["steps"], 2);
        assert_eq!(value[1]["description"], "Ship a release");
    }

    #[test]
    fn reports_no_workflows() {
        let (_temp, ctx) = setup("app_name: Empty\n");
        let mut ui = MockUI::new();

        ListCommand::new(ctx, ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("No workflows defined"));
    }

    #[test]
    fn missing_config_exits_with_code_2() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = ListCommand::new(CommandContext::new(temp.path(), None), ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
    }
}
