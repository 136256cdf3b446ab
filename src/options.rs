//! Display options for a stepper view.
//!
//! The caller owns the current [`DisplayOptions`]. An [`OptionsPanel`] only
//! knows how to turn one flag change into the next full option set and hand
//! that set to the caller's callback; it never keeps a copy of its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Boolean display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Whether nodes may be dragged around.
    pub allow_dragging_of_nodes: bool,
    /// Whether step labels are drawn.
    pub show_labels: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            allow_dragging_of_nodes: false,
            show_labels: true,
        }
    }
}

impl DisplayOptions {
    /// Read one flag.
    pub fn get(&self, flag: DisplayFlag) -> bool {
        match flag {
            DisplayFlag::AllowDraggingOfNodes => self.allow_dragging_of_nodes,
            DisplayFlag::ShowLabels => self.show_labels,
        }
    }

    /// Return a copy with one flag set.
    pub fn with(mut self, flag: DisplayFlag, value: bool) -> Self {
        match flag {
            DisplayFlag::AllowDraggingOfNodes => self.allow_dragging_of_nodes = value,
            DisplayFlag::ShowLabels => self.show_labels = value,
        }
        self
    }
}

/// A single display flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayFlag {
    /// `allowDraggingOfNodes`
    AllowDraggingOfNodes,
    /// `showLabels`
    ShowLabels,
}

impl DisplayFlag {
    /// All flags, in display order.
    pub const ALL: [DisplayFlag; 2] = [Self::AllowDraggingOfNodes, Self::ShowLabels];

    /// Element id used for the flag's checkbox.
    pub fn id(self) -> &'static str {
        match self {
            Self::AllowDraggingOfNodes => "allowDraggingOfNodes",
            Self::ShowLabels => "showLabels",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::AllowDraggingOfNodes => "Allow dragging of nodes",
            Self::ShowLabels => "Show labels",
        }
    }
}

impl fmt::Display for DisplayFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DisplayFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allowDraggingOfNodes" | "allow_dragging_of_nodes" => Ok(Self::AllowDraggingOfNodes),
            "showLabels" | "show_labels" => Ok(Self::ShowLabels),
            _ => Err(format!("unknown display option: {}", s)),
        }
    }
}

/// Forwards option changes to the caller.
pub struct OptionsPanel<F>
where
    F: FnMut(DisplayOptions),
{
    on_change: F,
}

impl<F> OptionsPanel<F>
where
    F: FnMut(DisplayOptions),
{
    /// Create a panel reporting every change to `on_change`.
    pub fn new(on_change: F) -> Self {
        Self { on_change }
    }

    /// Apply one checkbox change to the caller's `current` options.
    ///
    /// The callback always receives the complete option set, not just the
    /// changed flag. The new set is also returned.
    pub fn toggle(
        &mut self,
        current: DisplayOptions,
        flag: DisplayFlag,
        checked: bool,
    ) -> DisplayOptions {
        let next = current.with(flag, checked);
        debug!(flag = %flag, checked, "display option changed");
        (self.on_change)(next);
        next
    }
}
