use rootline_core::IntervalError;
use thiserror::Error;

use super::config::ConfigError;

/// Errors that can occur while finding a root of a scalar function.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid interval: {0}")]
    InvalidInterval(#[from] IntervalError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("precision must be finite and positive, got {0}")]
    InvalidPrecision(f64),

    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    #[error("no sign change on [{left}, {right}]: f(left)={left_value}, f(right)={right_value}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },

    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },

    #[error("denominator {value} at x = {x} is too close to zero")]
    DegenerateDenominator { x: f64, value: f64 },

    #[error("did not converge within {iters} iterations")]
    MaxIters { iters: usize },

    #[error("iteration left [{left}, {right}] with both transforms (last x = {x})")]
    Diverged { left: f64, right: f64, x: f64 },
}
