//! The label allow-list.
//!
//! The allow-list is fixed at build time. There is no API for
//! widening it per call: every label goes through the same [`label_policy`].

use std::collections::HashSet;
use std::sync::LazyLock;

use ammonia::Builder;

/// Tags a label may keep: inline grouping and paragraphs only.
pub const ALLOWED_TAGS: &[&str] = &["span", "p"];

/// Attributes a kept tag may carry.
pub const ALLOWED_ATTRIBUTES: &[&str] = &["class"];

/// Elements removed together with everything inside them.
pub const CONTENT_STRIPPED_TAGS: &[&str] = &["script", "style"];

/// Placeholder used for absent or blank labels.
///
/// This is a fixed constant, never user input, so it is emitted as-is.
pub const PLACEHOLDER: &str = "&nbsp;";

static LABEL_POLICY: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::empty();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
        .generic_attributes(ALLOWED_ATTRIBUTES.iter().copied().collect::<HashSet<_>>())
        .clean_content_tags(CONTENT_STRIPPED_TAGS.iter().copied().collect::<HashSet<_>>())
        .strip_comments(true);
    builder
});

static TEXT_POLICY: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::empty();
    builder
        .clean_content_tags(CONTENT_STRIPPED_TAGS.iter().copied().collect::<HashSet<_>>())
        .strip_comments(true);
    builder
});

/// The shared filter used for markup labels.
pub fn label_policy() -> &'static Builder<'static> {
    &LABEL_POLICY
}

/// A filter with no allowed tags at all, for plain-text output.
pub fn text_policy() -> &'static Builder<'static> {
    &TEXT_POLICY
}
