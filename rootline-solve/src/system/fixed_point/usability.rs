use itertools::Itertools;
use rootline_core::{EquationSystem, Interval, MAX_GRID_POINTS};

use super::{Config, Error};

/// Checks the contraction condition `Σ_j |∂f_i/∂x_j| <= 1` for every
/// function of `system` on a grid over the box spanned by `intervals`.
///
/// Each axis is sampled every `config.grid_step()`, endpoints included, and
/// every combination of axis samples is visited. Passing the check means
/// the iteration map contracts at every sampled point, which is sufficient
/// in practice for fixed-point iteration to converge inside the box.
///
/// # Errors
///
/// Returns `Error::DimensionMismatch` if `intervals` does not match the
/// system, `Error::Grid` or `Error::GridTooLarge` if the box holds more than
/// [`MAX_GRID_POINTS`] sample points, and `Error::NotContraction` for the
/// first point and function that violate the condition. A sum that is not a
/// number counts as a violation.
pub fn check_usability(
    system: &EquationSystem,
    intervals: &[Interval],
    config: &Config,
) -> Result<(), Error> {
    let dimension = system.dimension();
    if intervals.len() != dimension {
        return Err(Error::DimensionMismatch {
            expected: dimension,
            intervals: intervals.len(),
            start: dimension,
        });
    }

    let axes = intervals
        .iter()
        .map(|interval| interval.grid(config.grid_step()))
        .collect::<Result<Vec<_>, _>>()?;

    let total = axes
        .iter()
        .try_fold(1_usize, |total, axis| total.checked_mul(axis.len()))
        .filter(|&total| total <= MAX_GRID_POINTS);
    if total.is_none() {
        #[allow(clippy::cast_precision_loss)]
        let points = axes.iter().map(|axis| axis.len() as f64).product();
        return Err(Error::GridTooLarge {
            points,
            limit: MAX_GRID_POINTS,
        });
    }

    let points = axes
        .iter()
        .map(|axis| axis.iter().copied())
        .multi_cartesian_product();

    for point in points {
        for (index, function) in system.functions().iter().enumerate() {
            let sum = function.partial_derivative_norm(&point)?;
            if sum.is_nan() || sum > 1.0 {
                return Err(Error::NotContraction {
                    function: index,
                    sum,
                    point,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootline_core::VectorFunction;

    fn unit_box(dimension: usize) -> Vec<Interval> {
        vec![Interval::new(0.0, 1.0).expect("valid interval"); dimension]
    }

    #[test]
    fn contraction_passes() {
        let system = EquationSystem::new(
            "half",
            vec![
                VectorFunction::new("x1 / 2", 2, |x: &[f64]| x[1] / 2.0),
                VectorFunction::new("x0 / 2", 2, |x: &[f64]| x[0] / 2.0),
            ],
        )
        .expect("square system");

        assert_eq!(check_usability(&system, &unit_box(2), &Config::default()), Ok(()));
    }

    #[test]
    fn violation_reports_function_and_point() {
        // |∂f_1/∂x_0| = 3x_0 first exceeds 1 past x_0 = 1/3.
        let system = EquationSystem::new(
            "steep",
            vec![
                VectorFunction::new("0", 2, |_x: &[f64]| 0.0),
                VectorFunction::new("1.5 x0^2", 2, |x: &[f64]| 1.5 * x[0] * x[0]),
            ],
        )
        .expect("square system");

        let config = Config::new(100, 0.1).expect("valid config");
        let error = check_usability(&system, &unit_box(2), &config).expect_err("not a contraction");

        match error {
            Error::NotContraction {
                function,
                sum,
                point,
            } => {
                assert_eq!(function, 1);
                assert!(sum > 1.0);
                assert!((point[0] - 0.4).abs() < 1e-9);
                assert_eq!(point[1], 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn undefined_derivative_is_a_violation() {
        let system = EquationSystem::new(
            "root",
            vec![VectorFunction::new("sqrt(x0) / 4", 1, |x: &[f64]| {
                x[0].sqrt() / 4.0
            })],
        )
        .expect("square system");
        let intervals = [Interval::new(-1.0, 1.0).expect("valid interval")];

        match check_usability(&system, &intervals, &Config::default()) {
            Err(Error::NotContraction { function, sum, point }) => {
                assert_eq!(function, 0);
                assert!(sum.is_nan());
                assert!(point[0] < 0.0);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn oversized_box_is_an_error() {
        let system = EquationSystem::new(
            "half",
            vec![VectorFunction::new("x0 / 2", 1, |x: &[f64]| x[0] / 2.0)],
        )
        .expect("square system");

        // The width overflows to infinity.
        let huge = [Interval::new(-1e308, 1e308).expect("valid interval")];
        assert!(matches!(
            check_usability(&system, &huge, &Config::default()),
            Err(Error::Grid(_))
        ));

        // Each axis fits, but their product does not.
        let wide = vec![Interval::new(0.0, 100.0).expect("valid interval"); 3];
        assert!(matches!(
            check_usability(&system_of(3), &wide, &Config::default()),
            Err(Error::GridTooLarge { .. })
        ));
    }

    fn system_of(dimension: usize) -> EquationSystem {
        let functions = (0..dimension)
            .map(|i| VectorFunction::new("x_i / 2", dimension, move |x: &[f64]| x[i] / 2.0))
            .collect();
        EquationSystem::new("halves", functions).expect("square system")
    }

    #[test]
    fn interval_count_must_match() {
        let system = EquationSystem::new(
            "one",
            vec![VectorFunction::new("x0 / 2", 1, |x: &[f64]| x[0] / 2.0)],
        )
        .expect("square system");

        assert!(matches!(
            check_usability(&system, &unit_box(2), &Config::default()),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
