use rootline_core::{ScalarFunction, Univariate};

use crate::trace::{Row, Trace};

use super::Error;

/// A single-variable root-finding method.
///
/// Implementors wrap a method's `solve_unobserved` with the parameters the
/// method needs beyond the function, bracket, and precision.
pub trait RootFinder {
    /// The trace row this method records.
    type Row: Row<Answer = f64>;

    /// Human-readable method name.
    fn name(&self) -> &'static str;

    /// Runs the method on `function` over `bracket` and returns its trace.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are invalid or the method fails to
    /// converge. See [`Error`] for the failure modes.
    fn evaluate_root<F: Univariate>(
        &self,
        function: &ScalarFunction<F>,
        bracket: [f64; 2],
        precision: f64,
    ) -> Result<Trace<Self::Row>, Error>;

    /// Returns the approximate root held by the last row of `trace`.
    fn extract_answer(&self, trace: &Trace<Self::Row>) -> f64 {
        trace.answer()
    }
}
