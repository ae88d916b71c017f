/// A real-valued function of one variable.
///
/// Implementations must be deterministic, always producing the same value for
/// a given `x`. Derivative estimates and every solver rely on this.
///
/// Closures of type `Fn(f64) -> f64` implement `Univariate` automatically.
pub trait Univariate {
    /// Evaluates the function at `x`.
    fn at(&self, x: f64) -> f64;
}

impl<F> Univariate for F
where
    F: Fn(f64) -> f64,
{
    fn at(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A real-valued function of several variables.
///
/// Callers are responsible for passing the right number of arguments;
/// [`VectorFunction`](crate::VectorFunction) enforces it before calling.
///
/// Closures of type `Fn(&[f64]) -> f64` implement `Multivariate` automatically.
pub trait Multivariate {
    /// Evaluates the function at the point `x`.
    fn at(&self, x: &[f64]) -> f64;
}

impl<F> Multivariate for F
where
    F: Fn(&[f64]) -> f64,
{
    fn at(&self, x: &[f64]) -> f64 {
        self(x)
    }
}
