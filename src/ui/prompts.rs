//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::error::{Result, WaymarkError};

use super::Prompt;

/// Convert dialoguer errors to WaymarkError.
fn map_dialoguer_err(e: dialoguer::Error) -> WaymarkError {
    WaymarkError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Index of the option matching `prompt.default`, or the first option.
pub(crate) fn default_index(prompt: &Prompt) -> usize {
    prompt
        .default
        .as_ref()
        .and_then(|d| prompt.options.iter().position(|o| o.value == *d))
        .unwrap_or(0)
}

/// Show a select prompt on `term` and return the chosen option's value.
pub fn prompt_select(prompt: &Prompt, term: &Term) -> Result<String> {
    if prompt.options.is_empty() {
        return Err(WaymarkError::ConfigValidationError {
            message: format!("Prompt '{}' has no options", prompt.key),
        });
    }

    let labels: Vec<_> = prompt.options.iter().map(|o| o.label.as_str()).collect();

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_index(prompt))
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(prompt.options[selection].value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptOption;

    fn make_prompt(default: Option<&str>) -> Prompt {
        Prompt {
            key: "step".to_string(),
            question: "Go to step".to_string(),
            options: vec![
                PromptOption::new("Plan", "0"),
                PromptOption::new("Build", "1"),
                PromptOption::new("Done", "done"),
            ],
            default: default.map(String::from),
        }
    }

    #[test]
    fn default_index_matches_value() {
        assert_eq!(default_index(&make_prompt(Some("1"))), 1);
        assert_eq!(default_index(&make_prompt(Some("done"))), 2);
    }

    #[test]
    fn default_index_falls_back_to_first() {
        assert_eq!(default_index(&make_prompt(None)), 0);
        assert_eq!(default_index(&make_prompt(Some("missing"))), 0);
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let prompt = Prompt {
            options: Vec::new(),
            ..make_prompt(None)
        };
        let err = prompt_select(&prompt, &Term::stdout()).unwrap_err();
        assert!(err.to_string().contains("no options"));
    }
}
