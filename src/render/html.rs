//! HTML rendering.
//!
//! Labels are injected without further escaping: [`super::compose`] has
//! already run them through the sanitizer, which is the one place markup
//! is allowed to enter the document.

use super::{Orientation, RenderedStep};
use crate::steps::Classification;

/// CSS classes for a classification, if any.
///
/// Upcoming steps carry no marker.
pub fn css_class(classification: Classification) -> Option<&'static str> {
    match classification {
        Classification::Current => Some("is-current"),
        Classification::Completed => Some("is-lower show-bar"),
        Classification::Upcoming => None,
    }
}

/// Render steps as an ordered list.
pub fn render_html(steps: &[RenderedStep], orientation: Orientation) -> String {
    let list_class = match orientation {
        Orientation::Horizontal => "stepper",
        Orientation::Vertical => "stepper stepper--vertical",
    };

    let mut out = format!("<ol class=\"{}\">\n", list_class);
    for step in steps {
        let class_attr = css_class(step.classification)
            .map(|c| format!(" class=\"{}\"", c))
            .unwrap_or_default();
        out.push_str(&format!(
            "  <li{} data-step=\" \" data-index=\"{}\">{}</li>\n",
            class_attr, step.position, step.label
        ));
    }
    out.push_str("</ol>\n");
    out
}
