//! Label sanitizing.

use tracing::debug;

use super::policy::{label_policy, text_policy, PLACEHOLDER};

/// Sanitize a step label for direct injection as markup.
///
/// Absent or blank labels become [`PLACEHOLDER`]. Everything else is trimmed
/// and filtered through the allow-list; disallowed tags are stripped with
/// their text kept, `script`/`style` elements are dropped entirely.
///
/// The result is trimmed again after filtering, and a label that filters
/// down to nothing becomes the placeholder, so that sanitizing twice gives
/// the same string as sanitizing once.
///
/// # Example
///
/// ```
/// use waymark::sanitize::{sanitize, PLACEHOLDER};
///
/// assert_eq!(sanitize(Some("<script>alert(1)</script>Hello")), "Hello");
/// assert_eq!(
///     sanitize(Some("<span onclick=\"evil()\">Step</span>")),
///     "<span>Step</span>"
/// );
/// assert_eq!(sanitize(None), PLACEHOLDER);
/// ```
pub fn sanitize(raw: Option<&str>) -> String {
    let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    let cleaned = label_policy().clean(trimmed).to_string();
    if cleaned.len() != trimmed.len() {
        // Only sizes are logged: the stripped markup itself is untrusted.
        debug!(
            input_bytes = trimmed.len(),
            output_bytes = cleaned.len(),
            "label markup rewritten by sanitizer"
        );
    }

    match cleaned.trim() {
        "" => PLACEHOLDER.to_string(),
        kept => kept.to_string(),
    }
}

/// Reduce a label to plain text for non-markup output such as a terminal.
///
/// All tags are stripped. Entities produced by the filter are decoded, so
/// the result must never be injected back into a document.
pub fn plain_text(raw: Option<&str>) -> String {
    let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let cleaned = text_policy().clean(trimmed).to_string();
    html_escape::decode_html_entities(&cleaned).trim().to_string()
}
