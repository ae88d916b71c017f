use rootline_core::{Interval, ScalarFunction, Univariate};

use super::{Config, Error};

/// Checks that `precision` is finite and positive.
pub(super) fn precision(precision: f64) -> Result<f64, Error> {
    if precision.is_finite() && precision > 0.0 {
        Ok(precision)
    } else {
        Err(Error::InvalidPrecision(precision))
    }
}

/// Validates a search bracket and the requested precision together.
pub(super) fn inputs(bracket: [f64; 2], tolerance: f64) -> Result<Interval, Error> {
    let interval = Interval::try_from(bracket)?;
    precision(tolerance)?;
    Ok(interval)
}

/// Evaluates `function` at `x`, failing on a non-finite value.
pub(super) fn value<F: Univariate>(function: &ScalarFunction<F>, x: f64) -> Result<f64, Error> {
    finite(x, function.at(x))
}

/// Estimates `f'(x)`, failing on a non-finite estimate.
pub(super) fn derivative<F: Univariate>(
    function: &ScalarFunction<F>,
    x: f64,
) -> Result<f64, Error> {
    finite(x, function.derivative_at(x))
}

pub(super) fn finite(x: f64, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { x, value })
    }
}

/// Rejects a denominator whose magnitude is below `config.min_denominator()`.
pub(super) fn denominator(config: &Config, x: f64, value: f64) -> Result<f64, Error> {
    if value.abs() < config.min_denominator() {
        Err(Error::DegenerateDenominator { x, value })
    } else {
        Ok(value)
    }
}

/// Fails with `NoSignChange` unless `f(left)·f(right) <= 0`.
pub(super) fn sign_change(
    interval: &Interval,
    left_value: f64,
    right_value: f64,
) -> Result<(), Error> {
    if left_value * right_value > 0.0 {
        return Err(Error::NoSignChange {
            left: interval.left(),
            right: interval.right(),
            left_value,
            right_value,
        });
    }
    Ok(())
}

/// Picks the endpoint where `f·f'' > 0`, falling back to the right one.
///
/// Starting there keeps Newton-type iterates on the convex side of the root.
pub(super) fn newton_start<F: Univariate>(
    function: &ScalarFunction<F>,
    interval: &Interval,
) -> Result<f64, Error> {
    let left = interval.left();
    let curvature = finite(left, function.double_derivative_at(left))?;
    if value(function, left)? * curvature > 0.0 {
        Ok(left)
    } else {
        Ok(interval.right())
    }
}
