//! Bisection: halve a sign-changing bracket until it or `|f(x)|` is small.

use rootline_core::{Observer, ScalarFunction, Univariate};

use crate::{
    Action, Event, Solution, Status,
    record::Recorder,
    trace::{Row, Trace},
};

use super::{Config, Error, RootFinder, validate};

/// One bisection iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct BisectionRow {
    /// Left end of the bracket.
    pub left: f64,
    /// Right end of the bracket.
    pub right: f64,
    /// Midpoint of the bracket.
    pub x: f64,
    pub f_left: f64,
    pub f_right: f64,
    pub f_x: f64,
    /// Bracket width before halving.
    pub width: f64,
}

impl BisectionRow {
    pub const COLUMNS: [&'static str; 7] = ["a", "b", "x", "f(a)", "f(b)", "f(x)", "|a - b|"];
}

impl Row for BisectionRow {
    type Answer = f64;

    fn columns(&self) -> Vec<String> {
        Self::COLUMNS.iter().map(|&name| name.to_owned()).collect()
    }

    fn cells(&self) -> Vec<Option<f64>> {
        vec![
            Some(self.left),
            Some(self.right),
            Some(self.x),
            Some(self.f_left),
            Some(self.f_right),
            Some(self.f_x),
            Some(self.width),
        ]
    }

    fn answer(&self) -> f64 {
        self.x
    }
}

/// Finds a root of `function` in `bracket` by bisection.
///
/// Each iteration records the bracket, its midpoint, and the function values
/// at all three points, then keeps the half where the sign changes. The run
/// converges once the recorded width or `|f(x)|` drops below `precision`.
///
/// # Errors
///
/// Returns an error if the bracket or precision is invalid, if
/// `f(left)·f(right) > 0`, if the function returns a non-finite value, or if
/// `config.max_iters()` iterations pass without convergence.
pub fn solve<F, Obs>(
    function: &ScalarFunction<F>,
    bracket: [f64; 2],
    precision: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<BisectionRow>, Error>
where
    F: Univariate,
    Obs: for<'a> Observer<Event<'a, BisectionRow>, Action>,
{
    let interval = validate::inputs(bracket, precision)?;

    let (mut left, mut right) = (interval.left(), interval.right());
    let mut f_left = validate::value(function, left)?;
    let mut f_right = validate::value(function, right)?;
    validate::sign_change(&interval, f_left, f_right)?;

    let mut recorder = Recorder::new(observer);

    for iter in 1..=config.max_iters() {
        let x = left + (right - left) / 2.0;
        let f_x = validate::value(function, x)?;
        let width = right - left;

        let row = BisectionRow {
            left,
            right,
            x,
            f_left,
            f_right,
            f_x,
            width,
        };

        if let Some(action) = recorder.record(row) {
            match action {
                Action::StopEarly => return Ok(recorder.finish(Status::StoppedByObserver, iter)),
            }
        }

        if width < precision || f_x.abs() < precision {
            return Ok(recorder.finish(Status::Converged, iter));
        }

        // A zero at `left` keeps the left half so the root stays bracketed.
        if f_left * f_x <= 0.0 {
            right = x;
            f_right = f_x;
        } else {
            left = x;
            f_left = f_x;
        }
    }

    Err(Error::MaxIters {
        iters: config.max_iters(),
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Univariate>(
    function: &ScalarFunction<F>,
    bracket: [f64; 2],
    precision: f64,
    config: &Config,
) -> Result<Solution<BisectionRow>, Error> {
    solve(function, bracket, precision, config, ())
}

/// The bisection method as a [`RootFinder`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bisection {
    pub config: Config,
}

impl RootFinder for Bisection {
    type Row = BisectionRow;

    fn name(&self) -> &'static str {
        "half division method"
    }

    fn evaluate_root<F: Univariate>(
        &self,
        function: &ScalarFunction<F>,
        bracket: [f64; 2],
        precision: f64,
    ) -> Result<Trace<BisectionRow>, Error> {
        solve_unobserved(function, bracket, precision, &self.config).map(|solution| solution.trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn halves_until_bracket_is_small() {
        let function = ScalarFunction::new("x - 0.3", |x: f64| x - 0.3);
        let solution = solve_unobserved(&function, [0.0, 1.0], 1e-6, &Config::default())
            .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.answer(), 0.3, epsilon = 1e-6);

        let first = solution.trace.rows()[0];
        assert_relative_eq!(first.x, 0.5);
        assert_relative_eq!(first.width, 1.0);
        assert_relative_eq!(first.f_x, 0.2);
    }

    #[test]
    fn root_at_midpoint_stops_immediately() {
        let function = ScalarFunction::new("x - 1", |x: f64| x - 1.0);
        let solution = solve_unobserved(&function, [0.0, 2.0], 1e-4, &Config::default())
            .expect("should converge");

        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.answer(), 1.0);
    }

    #[test]
    fn root_at_left_endpoint_stays_bracketed() {
        let function = ScalarFunction::new("x", |x: f64| x);
        let solution = solve_unobserved(&function, [0.0, 1.0], 1e-8, &Config::default())
            .expect("should converge");

        assert_relative_eq!(solution.answer(), 0.0, epsilon = 1e-8);
        assert!(solution.trace.iter().all(|row| row.left == 0.0));
    }

    #[test]
    fn same_sign_endpoints_are_rejected() {
        let function = ScalarFunction::new("x^2 + 1", |x: f64| x * x + 1.0);
        let error = solve_unobserved(&function, [-1.0, 1.0], 1e-4, &Config::default())
            .expect_err("no sign change");

        assert_eq!(
            error,
            Error::NoSignChange {
                left: -1.0,
                right: 1.0,
                left_value: 2.0,
                right_value: 2.0,
            }
        );
    }

    #[test]
    fn finder_reports_name_and_trace() {
        let function = ScalarFunction::new("x^3 - 8", |x: f64| x.powi(3) - 8.0);
        let finder = Bisection::default();
        let trace = finder
            .evaluate_root(&function, [0.0, 3.0], 1e-6)
            .expect("should converge");

        assert_eq!(finder.name(), "half division method");
        assert_eq!(trace.columns(), BisectionRow::COLUMNS);
        assert_relative_eq!(finder.extract_answer(&trace), 2.0, epsilon = 1e-5);
    }
}
