use thiserror::Error;

/// Largest grid step the usability check accepts.
pub const MAX_GRID_STEP: f64 = 0.1;

/// Configuration for the fixed-point system solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    grid_step: f64,
}

/// Errors that can occur when validating a fixed-point config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("grid_step must be finite, positive, and at most {MAX_GRID_STEP}")]
    GridStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 10_000,
            grid_step: 0.01,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `grid_step` is the spacing, per axis, of the points where the
    /// contraction condition is checked before iterating.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `grid_step` is not in
    /// `(0, MAX_GRID_STEP]`.
    pub fn new(max_iters: usize, grid_step: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !(grid_step.is_finite() && grid_step > 0.0 && grid_step <= MAX_GRID_STEP) {
            return Err(ConfigError::GridStep);
        }

        Ok(Self {
            max_iters,
            grid_step,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the usability grid step.
    #[must_use]
    pub fn grid_step(&self) -> f64 {
        self.grid_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_step_is_bounded() {
        assert!(Config::new(10, 0.1).is_ok());
        assert_eq!(Config::new(10, 0.2), Err(ConfigError::GridStep));
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::GridStep));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::GridStep));
    }

    #[test]
    fn needs_an_iteration() {
        assert_eq!(Config::new(0, 0.01), Err(ConfigError::MaxIters));
    }
}
