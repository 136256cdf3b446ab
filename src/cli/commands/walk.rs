//! Walk command implementation.
//!
//! The `waymark walk` command renders a workflow and lets the user jump
//! between its steps. The selection lives here, in the command loop: the
//! [`Stepper`] only reports which step was activated, and the loop adopts
//! that index before drawing again.

use std::cell::Cell;

use tracing::debug;

use crate::cli::args::WalkArgs;
use crate::error::{Result, WaymarkError};
use crate::options::{DisplayFlag, OptionsPanel};
use crate::render::{compose, RenderedStep};
use crate::sanitize::plain_text;
use crate::steps::Stepper;
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult, EXIT_NO_CONFIG};
use super::render::{effective_selection, show_text};

/// Prompt key for the step picker.
pub const WALK_PROMPT: &str = "walk_step";

const CHOICE_DONE: &str = "done";
const CHOICE_TOGGLE_LABELS: &str = "toggle-labels";

/// The walk command implementation.
pub struct WalkCommand {
    context: CommandContext,
    args: WalkArgs,
}

impl WalkCommand {
    /// Create a new walk command.
    pub fn new(context: CommandContext, args: WalkArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &WalkArgs {
        &self.args
    }
}

fn step_prompt(steps: &[RenderedStep], selected: i64, show_labels: bool) -> Prompt {
    let mut options: Vec<PromptOption> = steps
        .iter()
        .map(|step| {
            let label = match plain_text(Some(&step.label)) {
                l if l.is_empty() => format!("Step {}", step.position + 1),
                l => l,
            };
            PromptOption::new(format!("Go to: {}", label), step.position.to_string())
        })
        .collect();

    let toggle = format!(
        "{}: {}",
        DisplayFlag::ShowLabels.label(),
        if show_labels { "on" } else { "off" }
    );
    options.push(PromptOption::new(toggle, CHOICE_TOGGLE_LABELS));
    options.push(PromptOption::new("Done", CHOICE_DONE));

    let next = selected.saturating_add(1).max(0);
    let default = usize::try_from(next)
        .ok()
        .filter(|&i| i < steps.len())
        .map(|i| i.to_string())
        .unwrap_or_else(|| CHOICE_DONE.to_string());

    Prompt {
        key: WALK_PROMPT.to_string(),
        question: "Go to step".to_string(),
        options,
        default: Some(default),
    }
}

impl Command for WalkCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.context.load(ui)? else {
            return Ok(CommandResult::failure(EXIT_NO_CONFIG));
        };

        let (name, workflow) = config.workflow(self.args.workflow.as_deref())?;
        let mut selected = effective_selection(self.args.selected, workflow);

        let requested = Cell::new(None);
        let options = Cell::new(config.settings.display);
        let mut stepper = Stepper::new(|index| requested.set(Some(index)));
        let mut panel = OptionsPanel::new(|next| options.set(next));

        loop {
            show_text(ui, &config, name, workflow, selected, options.get());
            if !ui.is_interactive() {
                break;
            }

            let rendered = compose(&workflow.steps, selected);
            let current = options.get();
            let choice = ui.prompt(&step_prompt(&rendered, selected, current.show_labels))?;

            match choice.as_str() {
                CHOICE_DONE => break,
                CHOICE_TOGGLE_LABELS => {
                    panel.toggle(current, DisplayFlag::ShowLabels, !current.show_labels);
                }
                value => {
                    let step = value
                        .parse::<usize>()
                        .ok()
                        .and_then(|i| rendered.get(i))
                        .ok_or_else(|| {
                            WaymarkError::Other(anyhow::anyhow!("Unknown step choice: {}", value))
                        })?;
                    stepper.activate(step);
                }
            }

            if let Some(index) = requested.take() {
                debug!(from = selected, to = index, "selection moved");
                selected = index;
            }
        }

        ui.success(&format!("Walked '{}'", name));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::Step;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
workflows:
  release:
    steps:
      - name: "<span class=\"bold\">Plan</span>"
      - name: Build
      - name: Ship
"#;

    fn setup() -> (TempDir, CommandContext) {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".waymark");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), CONFIG).unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        (temp, ctx)
    }

    #[test]
    fn non_interactive_renders_once() {
        let (_temp, ctx) = setup();
        let mut ui = MockUI::new();

        let result = WalkCommand::new(ctx, WalkArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.outputs(), ["[now] Plan ─ [next] Build ─ [next] Ship"]);
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn chosen_step_becomes_the_selection() {
        let (_temp, ctx) = setup();
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.queue_prompt_responses(WALK_PROMPT, vec!["2", "toggle-labels", "done"]);

        WalkCommand::new(ctx, WalkArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(
            ui.outputs(),
            [
                "◆ Plan ─ ◌ Build ─ ◌ Ship",
                "✓ Plan ─ ✓ Build ─ ◆ Ship",
                "✓ 1 ─ ✓ 2 ─ ◆ 3",
            ]
        );
        assert_eq!(ui.prompts_shown().len(), 3);
        assert!(ui.has_success("Walked 'release'"));
    }

    #[test]
    fn default_choices_walk_to_the_end() {
        let (_temp, ctx) = setup();
        let mut ui = MockUI::new();
        ui.set_interactive(true);

        WalkCommand::new(ctx, WalkArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(
            ui.outputs(),
            [
                "◆ Plan ─ ◌ Build ─ ◌ Ship",
                "✓ Plan ─ ◆ Build ─ ◌ Ship",
                "✓ Plan ─ ✓ Build ─ ◆ Ship",
            ]
        );
    }

    #[test]
    fn unknown_choice_is_an_error() {
        let (_temp, ctx) = setup();
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_prompt_response(WALK_PROMPT, "7");

        let err = WalkCommand::new(ctx, WalkArgs::default())
            .execute(&mut ui)
            .unwrap_err();
        assert!(err.to_string().contains("Unknown step choice: 7"));
    }

    #[test]
    fn prompt_defaults_to_next_step_then_done() {
        let steps = compose(&[Step::new("A"), Step::unnamed()], 0);

        let prompt = step_prompt(&steps, 0, true);
        assert_eq!(prompt.default.as_deref(), Some("1"));
        assert_eq!(prompt.options[0].label, "Go to: A");
        assert_eq!(prompt.options[1].label, "Go to: Step 2");
        assert_eq!(prompt.options[2].label, "Show labels: on");
        assert_eq!(prompt.options[3].value, "done");

        let prompt = step_prompt(&steps, 1, false);
        assert_eq!(prompt.default.as_deref(), Some("done"));
        assert_eq!(prompt.options[2].label, "Show labels: off");

        let prompt = step_prompt(&steps, -5, true);
        assert_eq!(prompt.default.as_deref(), Some("0"));
    }
}
