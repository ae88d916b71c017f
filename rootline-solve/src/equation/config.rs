use thiserror::Error;

/// Configuration shared by the single-variable root finders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    min_denominator: f64,
}

/// Errors that can occur when validating a root finder config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("min_denominator must be finite and non-negative")]
    MinDenominator,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 10_000,
            min_denominator: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `max_iters` caps the number of recorded iterations. `min_denominator`
    /// is the smallest magnitude a derivative or slope denominator may have
    /// before the method fails instead of dividing.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `min_denominator` is
    /// negative or non-finite.
    pub fn new(max_iters: usize, min_denominator: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !min_denominator.is_finite() || min_denominator < 0.0 {
            return Err(ConfigError::MinDenominator);
        }

        Ok(Self {
            max_iters,
            min_denominator,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the smallest accepted denominator magnitude.
    #[must_use]
    pub fn min_denominator(&self) -> f64 {
        self.min_denominator
    }
}
