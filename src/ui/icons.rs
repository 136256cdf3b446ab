//! Step markers for terminal output.
//!
//! `StepMarker` is the single vocabulary for how a classified step is drawn
//! in a terminal: a unicode icon on TTYs and a bracketed tag otherwise.

use super::theme::WaymarkTheme;
use crate::steps::Classification;

/// Terminal marker for a classified step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepMarker(pub Classification);

impl StepMarker {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self.0 {
            Classification::Completed => "✓",
            Classification::Current => "◆",
            Classification::Upcoming => "◌",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self.0 {
            Classification::Completed => "[done]",
            Classification::Current => "[now]",
            Classification::Upcoming => "[next]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &WaymarkTheme) -> String {
        let icon = self.icon();
        match self.0 {
            Classification::Completed => theme.completed.apply_to(icon).to_string(),
            Classification::Current => theme.current.apply_to(icon).to_string(),
            Classification::Upcoming => theme.upcoming.apply_to(icon).to_string(),
        }
    }
}

impl From<Classification> for StepMarker {
    fn from(classification: Classification) -> Self {
        Self(classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StepMarker(Classification::Completed).icon(), "✓");
        assert_eq!(StepMarker(Classification::Current).icon(), "◆");
        assert_eq!(StepMarker(Classification::Upcoming).icon(), "◌");
    }

    #[test]
    fn bracketed_returns_text_labels() {
        assert_eq!(StepMarker(Classification::Completed).bracketed(), "[done]");
        assert_eq!(StepMarker(Classification::Current).bracketed(), "[now]");
        assert_eq!(StepMarker(Classification::Upcoming).bracketed(), "[next]");
    }

    #[test]
    fn styled_contains_icon() {
        let theme = WaymarkTheme::plain();
        for class in [
            Classification::Completed,
            Classification::Current,
            Classification::Upcoming,
        ] {
            let marker = StepMarker::from(class);
            assert_eq!(marker.styled(&theme), marker.icon());
        }
    }
}
