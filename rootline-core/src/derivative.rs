//! Blended three-point finite differences.
//!
//! Every derivative in Rootline uses the same scheme. With step
//! `h = precision / 2`, three estimators are averaged with equal weight:
//!
//! - backward `(f(x) - f(x - h)) / h`
//! - central `(f(x + h) - f(x - h)) / (2h)`
//! - forward `(f(x + h) - f(x)) / h`
//!
//! Averaging damps the asymmetric truncation error of the one-sided
//! estimators. The scheme needs `f(x - h)`, `f(x)`, and `f(x + h)`.

/// Default precision used by derivative estimates.
pub const DEFAULT_PRECISION: f64 = 1e-5;

/// Estimates `f'(x)` with the blended scheme.
///
/// `precision` is the full central-difference span; the step is half of it.
pub fn blended<F>(f: F, x: f64, precision: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let step = precision / 2.0;

    let left = f(x - step);
    let center = f(x);
    let right = f(x + step);

    blend(left, center, right, step)
}

/// Combines three samples spaced `step` apart into a blended derivative.
pub fn blend(left: f64, center: f64, right: f64, step: f64) -> f64 {
    let backward = (center - left) / step;
    let central = (right - left) / (2.0 * step);
    let forward = (right - center) / step;

    (backward + central + forward) / 3.0
}
