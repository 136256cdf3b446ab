//! Allow-list sanitizing for step labels.
//!
//! Labels may carry a small amount of inline markup. Before a label reaches
//! a document it passes through a fixed allow-list:
//!
//! - [`ALLOWED_TAGS`] - tags that survive (`span`, `p`)
//! - [`ALLOWED_ATTRIBUTES`] - attributes that survive on them (`class`)
//! - [`sanitize`] - the single entry point for markup labels
//! - [`plain_text`] - tag-free rendition for terminal output
//!
//! # Example
//!
//! ```
//! use waymark::sanitize::sanitize;
//!
//! let label = sanitize(Some("<span class=\"bold\">Step One</span>"));
//! assert_eq!(label, "<span class=\"bold\">Step One</span>");
//! ```

pub mod label;
pub mod policy;

pub use label::{plain_text, sanitize};
pub use policy::{ALLOWED_ATTRIBUTES, ALLOWED_TAGS, CONTENT_STRIPPED_TAGS, PLACEHOLDER};
