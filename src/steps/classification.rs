//! Step classification relative to a selected index.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::step::Step;

/// Where a step stands relative to the caller's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Position is after the selection.
    Upcoming,
    /// Position equals the selection.
    Current,
    /// Position is before the selection.
    Completed,
}

impl Classification {
    /// Lowercase tag used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Current => "current",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a single position against the selected index.
///
/// The selected index may be any integer. A negative or too-large selection
/// simply means no position is current.
pub fn classify_position(position: usize, selected: i64) -> Classification {
    let position = i64::try_from(position).unwrap_or(i64::MAX);
    match position.cmp(&selected) {
        Ordering::Equal => Classification::Current,
        Ordering::Less => Classification::Completed,
        Ordering::Greater => Classification::Upcoming,
    }
}

/// Classify every step in order.
///
/// The result has one entry per step, in the same order. Nothing is cached:
/// call it again whenever the selection changes.
///
/// # Example
///
/// ```
/// use waymark::steps::{classify, Classification, Step};
///
/// let steps = vec![Step::new("Plan"), Step::new("Build"), Step::new("Ship")];
/// assert_eq!(
///     classify(&steps, 1),
///     vec![
///         Classification::Completed,
///         Classification::Current,
///         Classification::Upcoming,
///     ]
/// );
/// ```
pub fn classify(steps: &[Step], selected: i64) -> Vec<Classification> {
    (0..steps.len())
        .map(|position| {
            let class = classify_position(position, selected);
            trace!(position, selected, classification = %class, "classified step");
            class
        })
        .collect()
}
