//! A catalog of example functions and systems for Rootline.
//!
//! [`scalar_examples`] lists single-variable functions together with brackets
//! that each hold exactly one root. [`system_examples`] lists fixed-point
//! systems with a search box and a start point that pass the contraction
//! check.

use rootline_core::{
    EquationSystem, Interval, IntervalError, ScalarFunction, SystemError, VectorFunction,
};
use thiserror::Error;

/// A function of one variable whose catalog entry uses a plain `fn`.
pub type CatalogFunction = ScalarFunction<fn(f64) -> f64>;

/// Errors that can occur while building the catalog.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error(transparent)]
    Interval(#[from] IntervalError),

    #[error(transparent)]
    System(#[from] SystemError),
}

/// A scalar function and brackets around each of its roots.
#[derive(Debug, Clone)]
pub struct ScalarExample {
    pub function: CatalogFunction,
    pub brackets: Vec<[f64; 2]>,
}

/// A fixed-point system with its search box and start point.
#[derive(Debug)]
pub struct SystemExample {
    pub system: EquationSystem,
    pub intervals: Vec<Interval>,
    pub start: Vec<f64>,
}

fn polynomial(x: f64) -> f64 {
    -0.38 * x.powi(3) - 3.42 * x.powi(2) + 2.51 * x + 8.75
}

fn square_minus_two(x: f64) -> f64 {
    x * x - 2.0
}

fn sine_minus_half(x: f64) -> f64 {
    x.sin() - x / 2.0
}

fn exp_minus_three(x: f64) -> f64 {
    x.exp() - 3.0
}

/// Returns the single-variable examples.
#[must_use]
pub fn scalar_examples() -> Vec<ScalarExample> {
    let entry = |label: &str, func: fn(f64) -> f64, brackets: Vec<[f64; 2]>| ScalarExample {
        function: ScalarFunction::new(label, func),
        brackets,
    };

    vec![
        entry(
            "-0.38x^3 - 3.42x^2 + 2.51x + 8.75",
            polynomial,
            vec![[-10.0, -9.0], [-2.0, -1.0], [1.0, 2.0]],
        ),
        entry("x^2 - 2", square_minus_two, vec![[0.0, 2.0]]),
        entry("sin(x) - x/2", sine_minus_half, vec![[1.5, 2.5]]),
        entry("e^x - 3", exp_minus_three, vec![[0.0, 2.0]]),
    ]
}

/// Returns the fixed-point system examples.
///
/// # Errors
///
/// Returns an error only if a catalog entry is malformed.
pub fn system_examples() -> Result<Vec<SystemExample>, CatalogError> {
    let quadratic = SystemExample {
        system: EquationSystem::new(
            "quadratic",
            vec![
                VectorFunction::new("x_0 = 0.3 - 0.1 x_0^2 - 0.2 x_1^2", 2, |x: &[f64]| {
                    0.3 - 0.1 * x[0] * x[0] - 0.2 * x[1] * x[1]
                }),
                VectorFunction::new("x_1 = 0.7 - 0.2 x_0^2 - 0.1 x_0 x_1", 2, |x: &[f64]| {
                    0.7 - 0.2 * x[0] * x[0] - 0.1 * x[0] * x[1]
                }),
            ],
        )?,
        intervals: vec![Interval::new(0.0, 1.0)?, Interval::new(0.0, 1.0)?],
        start: vec![0.3, 0.7],
    };

    let trigonometric = SystemExample {
        system: EquationSystem::new(
            "trigonometric",
            vec![
                VectorFunction::new("x_0 = cos(x_1)/3 + 1.3", 2, |x: &[f64]| {
                    x[1].cos() / 3.0 + 1.3
                }),
                VectorFunction::new("x_1 = sin(x_0 - 0.6) - 1.6", 2, |x: &[f64]| {
                    (x[0] - 0.6).sin() - 1.6
                }),
            ],
        )?,
        intervals: vec![Interval::new(1.0, 2.0)?, Interval::new(-1.5, -0.5)?],
        start: vec![1.5, -1.0],
    };

    Ok(vec![quadratic, trigonometric])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bracket_holds_one_root() {
        for example in scalar_examples() {
            for [left, right] in &example.brackets {
                let single = example
                    .function
                    .has_one_root_on_interval(*left, *right)
                    .expect("bracket is fine enough");
                assert!(single, "{} on [{left}, {right}]", example.function);
            }
        }
    }

    #[test]
    fn systems_start_inside_their_box() {
        for example in system_examples().expect("catalog builds") {
            assert_eq!(example.intervals.len(), example.system.dimension());
            for (interval, &x) in example.intervals.iter().zip(&example.start) {
                assert!(interval.contains(x));
            }
        }
    }
}
