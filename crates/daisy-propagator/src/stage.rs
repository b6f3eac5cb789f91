//! The [`Stage`] trait.

use crate::context::StepContext;

/// One phase of the per-tick update pipeline.
///
/// # Contract
///
/// - Read grid state only through [`StepContext::current`]; write only
///   through [`StepContext::next`]. The scratch grid starts as an exact
///   copy of the current one.
/// - Draw randomness only from [`StepContext::rng`], the single source
///   owned by the engine. With the same draws a stage must produce the
///   same output.
/// - `&self`: stages hold parameters, never simulation state.
///
/// # Examples
///
/// A stage that clears every daisy:
///
/// ```
/// use daisy_core::Patch;
/// use daisy_propagator::{Stage, StepContext};
///
/// struct Scorch;
///
/// impl Stage for Scorch {
///     fn name(&self) -> &str { "scorch" }
///
///     fn step(&self, ctx: &mut StepContext<'_>) {
///         let (w, h) = ctx.current().shape();
///         for x in 0..w as i32 {
///             for y in 0..h as i32 {
///                 ctx.next().set(x, y, Patch::Empty);
///             }
///         }
///     }
/// }
///
/// assert_eq!(Scorch.name(), "scorch");
/// ```
pub trait Stage: Send + 'static {
    /// Human-readable name for logging and metrics.
    fn name(&self) -> &str;

    /// Execute the stage for one tick.
    ///
    /// Total: a stage has no failure mode once the engine is initialized.
    fn step(&self, ctx: &mut StepContext<'_>);
}
