//! The step model.
//!
//! Steps are classified against a selected index that the caller owns:
//!
//! - [`Step`] - one stage of a workflow with an optional label
//! - [`Classification`] - upcoming, current or completed
//! - [`classify`] - classify a whole sequence, in order
//! - [`Stepper`] - forwards step activations to a caller callback
//!
//! Nothing here stores the selection. Each render passes the selection in
//! and gets freshly derived classifications back.

pub mod classification;
pub mod step;
pub mod stepper;

pub use classification::{classify, classify_position, Classification};
pub use step::Step;
pub use stepper::Stepper;
