//! Step activation.

use std::fmt;

use tracing::debug;

use crate::render::RenderedStep;

/// Forwards step activations to the caller.
///
/// A `Stepper` holds no selection. When a user activates a step, the
/// stepper hands the step's index to the callback it was built with and
/// the caller decides what the new selection is. The callback is a
/// required constructor argument, so a stepper that would silently drop
/// activations cannot exist.
///
/// # Example
///
/// ```
/// use waymark::steps::Stepper;
///
/// let mut requested = Vec::new();
/// let mut stepper = Stepper::new(|index| requested.push(index));
/// stepper.request_advance(2);
/// stepper.request_advance(0);
/// drop(stepper);
/// assert_eq!(requested, vec![2, 0]);
/// ```
pub struct Stepper<F>
where
    F: FnMut(i64),
{
    on_advance: F,
}

impl<F> Stepper<F>
where
    F: FnMut(i64),
{
    /// Create a stepper that reports activations to `on_advance`.
    pub fn new(on_advance: F) -> Self {
        Self { on_advance }
    }

    /// Ask the caller to advance to `index`.
    ///
    /// The index is passed through verbatim, negative or past the end
    /// included. Bounds are the caller's concern.
    pub fn request_advance(&mut self, index: i64) {
        debug!(index, "step activation requested");
        (self.on_advance)(index);
    }

    /// Activate a rendered step.
    pub fn activate(&mut self, step: &RenderedStep) {
        self.request_advance(i64::try_from(step.position).unwrap_or(i64::MAX));
    }
}

impl<F> fmt::Debug for Stepper<F>
where
    F: FnMut(i64),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stepper").finish_non_exhaustive()
    }
}
