use std::fmt;

use crate::{
    Interval, IntervalError, Univariate,
    derivative::{self, DEFAULT_PRECISION},
};

/// Default number of steps used by [`ScalarFunction::has_one_root_on_interval`].
pub const DEFAULT_SPLITS: usize = 1000;

/// Largest step the single-root test accepts between derivative samples.
const MAX_SPLIT_STEP: f64 = 0.5;

/// A labeled real-valued function of one variable.
///
/// The label is for display only; all numerical behavior comes from the
/// wrapped [`Univariate`].
#[derive(Clone)]
pub struct ScalarFunction<F> {
    label: String,
    func: F,
}

impl<F: Univariate> ScalarFunction<F> {
    /// Wraps `func` with a display label.
    pub fn new(label: impl Into<String>, func: F) -> Self {
        Self {
            label: label.into(),
            func,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.func.at(x)
    }

    /// Estimates `f'(x)` using the default precision.
    #[must_use]
    pub fn derivative_at(&self, x: f64) -> f64 {
        self.derivative_at_with(x, DEFAULT_PRECISION)
    }

    /// Estimates `f'(x)` with the blended three-point scheme.
    #[must_use]
    pub fn derivative_at_with(&self, x: f64, precision: f64) -> f64 {
        derivative::blended(|x| self.at(x), x, precision)
    }

    /// Estimates `f''(x)` using the default precision.
    #[must_use]
    pub fn double_derivative_at(&self, x: f64) -> f64 {
        self.double_derivative_at_with(x, DEFAULT_PRECISION)
    }

    /// Estimates `f''(x)` by blending first-derivative estimates.
    ///
    /// Costs nine evaluations of the underlying function.
    #[must_use]
    pub fn double_derivative_at_with(&self, x: f64, precision: f64) -> f64 {
        derivative::blended(|x| self.derivative_at_with(x, precision), x, precision)
    }

    /// Tests whether the function has exactly one root on `[left, right]`,
    /// walking the interval in [`DEFAULT_SPLITS`] steps.
    ///
    /// # Errors
    ///
    /// See [`ScalarFunction::has_one_root_on_interval_with`].
    pub fn has_one_root_on_interval(&self, left: f64, right: f64) -> Result<bool, IntervalError> {
        self.has_one_root_on_interval_with(left, right, DEFAULT_SPLITS)
    }

    /// Tests whether the function has exactly one root on `[left, right]`.
    ///
    /// Returns `true` only if the function changes sign between the endpoints
    /// and its derivative keeps the sign it has at `left` at every one of the
    /// `n_splits` steps. This is sufficient for a single root but not
    /// necessary, so `false` means "cannot tell", not "no root".
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::Empty` if `right <= left`, `NonFinite` for
    /// non-finite endpoints, and `TooCoarse` if a step exceeds `0.5` or
    /// `n_splits` is zero.
    pub fn has_one_root_on_interval_with(
        &self,
        left: f64,
        right: f64,
        n_splits: usize,
    ) -> Result<bool, IntervalError> {
        let interval = Interval::new(left, right)?;

        // Zero splits gives an infinite step.
        #[allow(clippy::cast_precision_loss)]
        let step = interval.width() / n_splits as f64;
        if step > MAX_SPLIT_STEP {
            return Err(IntervalError::TooCoarse {
                step,
                limit: MAX_SPLIT_STEP,
            });
        }

        if self.at(left) * self.at(right) > 0.0 {
            return Ok(false);
        }

        let initial = self.derivative_at(left);
        let monotonic = (1..=n_splits).all(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = (left + step * i as f64).min(right);
            self.derivative_at(x) * initial >= 0.0
        });

        Ok(monotonic)
    }
}

impl<F> fmt::Debug for ScalarFunction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarFunction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<F> fmt::Display for ScalarFunction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn linear_derivatives() {
        let f = ScalarFunction::new("x", |x: f64| x);

        for x in [-10.0, -1.5, 0.0, 0.25, 7.0] {
            assert_relative_eq!(f.derivative_at(x), 1.0, epsilon = 1e-6);
            assert_relative_eq!(f.double_derivative_at(x), 0.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn quadratic_derivatives() {
        let f = ScalarFunction::new("x^2 - 2", |x: f64| x * x - 2.0);

        assert_relative_eq!(f.derivative_at(1.5), 3.0, epsilon = 1e-6);
        assert_relative_eq!(f.double_derivative_at(1.5), 2.0, epsilon = 1e-2);
    }

    #[test]
    fn custom_precision_changes_step() {
        let f = ScalarFunction::new("x^3", |x: f64| x.powi(3));

        // Truncation error of the blend grows with the step for a cubic.
        let coarse = f.derivative_at_with(1.0, 0.2);
        let fine = f.derivative_at_with(1.0, 1e-4);
        assert!((coarse - 3.0).abs() > (fine - 3.0).abs());
    }

    #[test]
    fn one_root_for_monotonic_sign_change() {
        let f = ScalarFunction::new("x - 1", |x: f64| x - 1.0);
        assert_eq!(f.has_one_root_on_interval(0.0, 2.0), Ok(true));
    }

    #[test]
    fn two_roots_are_not_one() {
        let f = ScalarFunction::new("x^2 - 1", |x: f64| x * x - 1.0);
        assert_eq!(f.has_one_root_on_interval(-2.0, 2.0), Ok(false));
    }

    #[test]
    fn sign_change_with_turning_derivative_is_not_one_root() {
        // Roots at -0.1, 0 and 0.1, with f(-0.2) < 0 < f(0.25).
        let f = ScalarFunction::new("x^3 - 0.01x", |x: f64| x.powi(3) - 0.01 * x);

        assert!(f.at(-0.2) * f.at(0.25) < 0.0);
        assert_eq!(f.has_one_root_on_interval(-0.2, 0.25), Ok(false));
    }

    #[test]
    fn zero_splits_are_too_coarse() {
        let f = ScalarFunction::new("x^3 - 0.01x", |x: f64| x.powi(3) - 0.01 * x);

        assert!(matches!(
            f.has_one_root_on_interval_with(-0.2, 0.25, 0),
            Err(IntervalError::TooCoarse { .. })
        ));
    }

    #[test]
    fn no_sign_change_is_not_one_root() {
        let f = ScalarFunction::new("x^2 + 1", |x: f64| x * x + 1.0);
        assert_eq!(f.has_one_root_on_interval(-1.0, 1.0), Ok(false));
    }

    #[test]
    fn single_root_test_rejects_bad_intervals() {
        let f = ScalarFunction::new("x", |x: f64| x);

        assert!(matches!(
            f.has_one_root_on_interval(1.0, 1.0),
            Err(IntervalError::Empty { .. })
        ));
        assert!(matches!(
            f.has_one_root_on_interval(2.0, -2.0),
            Err(IntervalError::Empty { .. })
        ));
        assert!(matches!(
            f.has_one_root_on_interval_with(0.0, 10.0, 10),
            Err(IntervalError::TooCoarse { .. })
        ));
    }

    #[test]
    fn display_uses_label() {
        let f = ScalarFunction::new("sin(x)", f64::sin);
        assert_eq!(f.to_string(), "sin(x)");
        assert_eq!(f.label(), "sin(x)");
    }
}
