//! Terminal rendering.

use super::{Orientation, RenderedStep};
use crate::options::DisplayOptions;
use crate::sanitize::plain_text;
use crate::steps::Classification;
use crate::ui::{StepMarker, WaymarkTheme};

/// How markers are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Unicode icons, styled with the theme.
    Icons,
    /// Bracketed tags such as `[now]`, for logs and pipes.
    Bracketed,
}

/// Renders steps as terminal lines.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    theme: WaymarkTheme,
    markers: MarkerStyle,
    orientation: Orientation,
    options: DisplayOptions,
}

impl TextRenderer {
    /// Create a renderer.
    pub fn new(theme: WaymarkTheme, markers: MarkerStyle, orientation: Orientation) -> Self {
        Self {
            theme,
            markers,
            orientation,
            options: DisplayOptions::default(),
        }
    }

    /// Use the given display options.
    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    /// Render to lines.
    ///
    /// Vertical layouts produce one line per step; horizontal layouts a
    /// single line. Labels are reduced to plain text.
    pub fn render(&self, steps: &[RenderedStep]) -> Vec<String> {
        let items: Vec<String> = steps.iter().map(|step| self.item(step)).collect();
        match self.orientation {
            Orientation::Vertical => items,
            Orientation::Horizontal if items.is_empty() => Vec::new(),
            Orientation::Horizontal => {
                let sep = format!(" {} ", self.theme.connector.apply_to("─"));
                vec![items.join(&sep)]
            }
        }
    }

    fn item(&self, step: &RenderedStep) -> String {
        let marker = StepMarker(step.classification);
        let marker = match self.markers {
            MarkerStyle::Icons => marker.styled(&self.theme),
            MarkerStyle::Bracketed => marker.bracketed().to_string(),
        };

        if !self.options.show_labels {
            return format!("{} {}", marker, step.position + 1);
        }

        let label = plain_text(Some(&step.label));
        let label = if label.trim().is_empty() {
            format!("{}", step.position + 1)
        } else {
            label
        };
        let styled = match step.classification {
            Classification::Current => self.theme.current.apply_to(label),
            Classification::Completed => self.theme.completed.apply_to(label),
            Classification::Upcoming => self.theme.upcoming.apply_to(label),
        };
        format!("{} {}", marker, styled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::compose;
    use crate::steps::Step;

    fn plain(markers: MarkerStyle, orientation: Orientation) -> TextRenderer {
        TextRenderer::new(WaymarkTheme::plain(), markers, orientation)
    }

    fn sample() -> Vec<RenderedStep> {
        compose(
            &[
                Step::new("<span class=\"bold\">Plan</span>"),
                Step::new("Build &amp; test"),
                Step::unnamed(),
            ],
            1,
        )
    }

    #[test]
    fn vertical_renders_one_line_per_step() {
        let lines = plain(MarkerStyle::Icons, Orientation::Vertical).render(&sample());
        assert_eq!(lines, vec!["✓ Plan", "◆ Build & test", "◌ 3"]);
    }

    #[test]
    fn horizontal_renders_single_line() {
        let lines = plain(MarkerStyle::Bracketed, Orientation::Horizontal).render(&sample());
        assert_eq!(lines, vec!["[done] Plan ─ [now] Build & test ─ [next] 3"]);
    }

    #[test]
    fn hidden_labels_show_positions_only() {
        let options = DisplayOptions {
            show_labels: false,
            ..DisplayOptions::default()
        };
        let lines = plain(MarkerStyle::Icons, Orientation::Vertical)
            .with_options(options)
            .render(&sample());
        assert_eq!(lines, vec!["✓ 1", "◆ 2", "◌ 3"]);
    }

    #[test]
    fn empty_sequence_renders_nothing() {
        assert!(plain(MarkerStyle::Icons, Orientation::Horizontal)
            .render(&[])
            .is_empty());
        assert!(plain(MarkerStyle::Icons, Orientation::Vertical)
            .render(&[])
            .is_empty());
    }
}
