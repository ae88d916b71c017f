use std::fmt;

use thiserror::Error;

use crate::{ArgumentError, VectorFunction};

/// Errors that can occur when building an [`EquationSystem`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SystemError {
    #[error("a system needs at least one function")]
    Empty,

    #[error("function {index} takes {actual} arguments, expected {expected}")]
    MixedArity {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("system has {functions} functions of {arity} arguments; it must be square")]
    NotSquare { functions: usize, arity: usize },
}

/// A square fixed-point system `x_i = f_i(x_0, ..., x_{n-1})`.
///
/// Holds `n` coordinate functions, each taking exactly `n` arguments.
#[derive(Debug)]
pub struct EquationSystem {
    label: String,
    functions: Vec<VectorFunction>,
}

impl EquationSystem {
    /// Builds a system from its ordered coordinate functions.
    ///
    /// # Errors
    ///
    /// Returns `SystemError::Empty` for no functions, `MixedArity` for the
    /// first function whose arity differs from the first one's, and
    /// `NotSquare` if the function count differs from the common arity.
    pub fn new(
        label: impl Into<String>,
        functions: Vec<VectorFunction>,
    ) -> Result<Self, SystemError> {
        let expected = functions.first().ok_or(SystemError::Empty)?.arity();

        if let Some((index, function)) = functions
            .iter()
            .enumerate()
            .find(|(_, function)| function.arity() != expected)
        {
            return Err(SystemError::MixedArity {
                index,
                expected,
                actual: function.arity(),
            });
        }

        if functions.len() != expected {
            return Err(SystemError::NotSquare {
                functions: functions.len(),
                arity: expected,
            });
        }

        Ok(Self {
            label: label.into(),
            functions,
        })
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of equations, which equals the number of unknowns.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.functions.len()
    }

    /// Returns the coordinate functions in order.
    #[must_use]
    pub fn functions(&self) -> &[VectorFunction] {
        &self.functions
    }

    /// Applies every coordinate function to `x`, producing the next iterate.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::ArityMismatch` if `x` has the wrong length.
    pub fn apply(&self, x: &[f64]) -> Result<Vec<f64>, ArgumentError> {
        self.functions.iter().map(|f| f.at(x)).collect()
    }

    /// Returns `x_i - f_i(x)` for every coordinate.
    ///
    /// All entries are zero at an exact fixed point.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::ArityMismatch` if `x` has the wrong length.
    pub fn residuals(&self, x: &[f64]) -> Result<Vec<f64>, ArgumentError> {
        let image = self.apply(x)?;
        Ok(x.iter().zip(image).map(|(xi, fi)| xi - fi).collect())
    }
}

impl fmt::Display for EquationSystem {
    /// Draws the system as a brace-bracketed column of equations.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.functions.len() - 1;
        for (i, function) in self.functions.iter().enumerate() {
            let brace = match i {
                _ if last == 0 => "{",
                0 => "/",
                i if i == last => "\\",
                _ => "|",
            };
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{brace} {function}")?;
        }
        Ok(())
    }
}
