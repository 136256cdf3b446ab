//! Sanitize command implementation.
//!
//! The `waymark sanitize` command cleans a single label, taken from the
//! argument or read from stdin.

use std::io::Read;

use crate::cli::args::SanitizeArgs;
use crate::error::Result;
use crate::sanitize::{plain_text, sanitize};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The sanitize command implementation.
pub struct SanitizeCommand {
    args: SanitizeArgs,
}

impl SanitizeCommand {
    /// Create a new sanitize command.
    pub fn new(args: SanitizeArgs) -> Self {
        Self { args }
    }

    /// Clean `raw` according to the command's flags.
    pub fn clean(&self, raw: &str) -> String {
        if self.args.plain {
            plain_text(Some(raw))
        } else {
            sanitize(Some(raw))
        }
    }
}

impl Command for SanitizeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let raw = match self.args.label {
            Some(ref label) => label.clone(),
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        ui.output(&self.clean(&raw));
        Ok(CommandResult::success())
    }
}
