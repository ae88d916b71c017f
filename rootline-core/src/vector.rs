use std::fmt;

use thiserror::Error;

use crate::{
    Multivariate,
    derivative::{self, DEFAULT_PRECISION},
};

/// Errors raised when a [`VectorFunction`] is called with bad arguments.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    /// The point does not have one coordinate per argument.
    #[error("expected {expected} arguments, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// A partial derivative was requested for a coordinate that does not exist.
    #[error("argument index {index} is out of range for arity {arity}")]
    IndexOutOfRange { index: usize, arity: usize },
}

/// A labeled real-valued function of a fixed number of variables.
///
/// Vector functions are the coordinate functions of an
/// [`EquationSystem`](crate::EquationSystem). The evaluator is boxed so a
/// system can hold a different closure per coordinate.
pub struct VectorFunction {
    label: String,
    arity: usize,
    func: Box<dyn Multivariate + Send + Sync>,
}

impl VectorFunction {
    /// Wraps `func` as a function of `arity` variables.
    pub fn new<F>(label: impl Into<String>, arity: usize, func: F) -> Self
    where
        F: Multivariate + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            arity,
            func: Box::new(func),
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of arguments the function takes.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::ArityMismatch` if `x.len()` differs from the arity.
    pub fn at(&self, x: &[f64]) -> Result<f64, ArgumentError> {
        self.check_arity(x)?;
        Ok(self.func.at(x))
    }

    /// Estimates `∂f/∂x[index]` at `x` using the default precision.
    ///
    /// # Errors
    ///
    /// See [`VectorFunction::partial_derivative_at_with`].
    pub fn partial_derivative_at(&self, x: &[f64], index: usize) -> Result<f64, ArgumentError> {
        self.partial_derivative_at_with(x, index, DEFAULT_PRECISION)
    }

    /// Estimates `∂f/∂x[index]` at `x` with the blended three-point scheme,
    /// perturbing only coordinate `index`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::ArityMismatch` for a wrongly sized point and
    /// `ArgumentError::IndexOutOfRange` if `index >= arity`.
    pub fn partial_derivative_at_with(
        &self,
        x: &[f64],
        index: usize,
        precision: f64,
    ) -> Result<f64, ArgumentError> {
        self.check_arity(x)?;
        if index >= self.arity {
            return Err(ArgumentError::IndexOutOfRange {
                index,
                arity: self.arity,
            });
        }

        let step = precision / 2.0;
        let mut shifted = x.to_vec();

        shifted[index] = x[index] - step;
        let left = self.func.at(&shifted);
        shifted[index] = x[index] + step;
        let right = self.func.at(&shifted);
        let center = self.func.at(x);

        Ok(derivative::blend(left, center, right, step))
    }

    /// Sum of absolute partial derivatives over every argument at `x`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::ArityMismatch` for a wrongly sized point.
    pub fn partial_derivative_norm(&self, x: &[f64]) -> Result<f64, ArgumentError> {
        (0..self.arity).try_fold(0.0, |sum, index| {
            Ok(sum + self.partial_derivative_at(x, index)?.abs())
        })
    }

    fn check_arity(&self, x: &[f64]) -> Result<(), ArgumentError> {
        if x.len() == self.arity {
            Ok(())
        } else {
            Err(ArgumentError::ArityMismatch {
                expected: self.arity,
                actual: x.len(),
            })
        }
    }
}

impl fmt::Debug for VectorFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorFunction")
            .field("label", &self.label)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for VectorFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn product() -> VectorFunction {
        VectorFunction::new("x_0 * x_1^2", 2, |x: &[f64]| x[0] * x[1] * x[1])
    }

    #[test]
    fn evaluates_with_matching_arity() {
        assert_relative_eq!(product().at(&[2.0, 3.0]).expect("arity 2"), 18.0);
    }

    #[test]
    fn rejects_wrong_arity() {
        let f = product();

        assert_eq!(
            f.at(&[1.0]),
            Err(ArgumentError::ArityMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert!(matches!(
            f.partial_derivative_at(&[1.0, 2.0, 3.0], 0),
            Err(ArgumentError::ArityMismatch { .. })
        ));
    }

    #[test]
    fn partial_derivatives_perturb_one_coordinate() {
        let f = product();
        let x = [2.0, 3.0];

        assert_relative_eq!(
            f.partial_derivative_at(&x, 0).expect("valid index"),
            9.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            f.partial_derivative_at(&x, 1).expect("valid index"),
            12.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn rejects_out_of_range_index() {
        assert_eq!(
            product().partial_derivative_at(&[1.0, 1.0], 2),
            Err(ArgumentError::IndexOutOfRange { index: 2, arity: 2 })
        );
    }

    #[test]
    fn partial_derivative_norm_sums_magnitudes() {
        let f = VectorFunction::new("0.5 x_0 - 0.25 x_1", 2, |x: &[f64]| {
            0.5 * x[0] - 0.25 * x[1]
        });

        let norm = f.partial_derivative_norm(&[10.0, -4.0]).expect("arity 2");
        assert_relative_eq!(norm, 0.75, epsilon = 1e-8);
    }
}
