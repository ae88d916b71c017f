use rootline_core::{ArgumentError, Interval, IntervalError};
use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during fixed-point iteration of a system.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("precision must be finite and positive, got {0}")]
    InvalidPrecision(f64),

    #[error("system has {expected} unknowns but got {intervals} intervals and {start} start values")]
    DimensionMismatch {
        expected: usize,
        intervals: usize,
        start: usize,
    },

    #[error("start value {value} of x_{variable} is outside {interval:?}")]
    StartOutsideInterval {
        variable: usize,
        value: f64,
        interval: Interval,
    },

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error("cannot sample the search box: {0}")]
    Grid(#[from] IntervalError),

    #[error("usability grid would visit {points} points, more than the limit {limit}")]
    GridTooLarge { points: f64, limit: usize },

    /// The iteration map is not a contraction somewhere in the search box.
    /// A `NaN` sum means the derivative is undefined at `point`.
    #[error("sum of |partial derivatives| of f_{function} is {sum}, not <= 1, at {point:?}")]
    NotContraction {
        function: usize,
        sum: f64,
        point: Vec<f64>,
    },

    #[error("iterated out of the search box: x_{variable} = {value} is outside {interval:?}")]
    LeftInterval {
        variable: usize,
        value: f64,
        interval: Interval,
    },

    #[error("did not converge within {iters} iterations")]
    MaxIters { iters: usize },
}
