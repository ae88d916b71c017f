//! Newton's method with a finite-difference derivative.

use rootline_core::{Observer, ScalarFunction, Univariate};

use crate::{
    Action, Event, Solution, Status,
    record::Recorder,
    trace::{Row, Trace},
};

use super::{Config, Error, RootFinder, validate};

/// One Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonRow {
    pub x: f64,
    pub f_x: f64,
    /// Estimated `f'(x)`.
    pub derivative: f64,
    /// The next iterate, `x - f(x)/f'(x)`.
    pub next: f64,
    pub change: f64,
}

impl NewtonRow {
    pub const COLUMNS: [&'static str; 5] =
        ["x_k", "f(x_k)", "f'(x_k)", "x_(k+1)", "|x_(k+1) - x_k|"];
}

impl Row for NewtonRow {
    type Answer = f64;

    fn columns(&self) -> Vec<String> {
        Self::COLUMNS.iter().map(|&name| name.to_owned()).collect()
    }

    fn cells(&self) -> Vec<Option<f64>> {
        vec![
            Some(self.x),
            Some(self.f_x),
            Some(self.derivative),
            Some(self.next),
            Some(self.change),
        ]
    }

    fn answer(&self) -> f64 {
        self.next
    }
}

/// Finds a root of `function` by Newton's method, starting from the end of
/// `bracket` where `f·f'' > 0` (the right end if neither qualifies).
///
/// The bracket only picks the starting point; iterates may leave it. The run
/// converges once the step or `|f(x)|` drops below `precision`.
///
/// # Errors
///
/// Returns an error if the bracket or precision is invalid, if `|f'(x)|`
/// falls below `config.min_denominator()`, if a value or derivative is
/// non-finite, or if `config.max_iters()` iterations pass without
/// convergence.
pub fn solve<F, Obs>(
    function: &ScalarFunction<F>,
    bracket: [f64; 2],
    precision: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<NewtonRow>, Error>
where
    F: Univariate,
    Obs: for<'a> Observer<Event<'a, NewtonRow>, Action>,
{
    let interval = validate::inputs(bracket, precision)?;

    let mut x = validate::newton_start(function, &interval)?;
    let mut recorder = Recorder::new(observer);

    for iter in 1..=config.max_iters() {
        let f_x = validate::value(function, x)?;
        let derivative = validate::derivative(function, x)?;
        let derivative = validate::denominator(config, x, derivative)?;

        let step = f_x / derivative;
        let next = validate::finite(x, x - step)?;
        let change = (next - x).abs();

        let row = NewtonRow {
            x,
            f_x,
            derivative,
            next,
            change,
        };

        if let Some(action) = recorder.record(row) {
            match action {
                Action::StopEarly => return Ok(recorder.finish(Status::StoppedByObserver, iter)),
            }
        }

        if change < precision || step.abs() < precision || f_x.abs() < precision {
            return Ok(recorder.finish(Status::Converged, iter));
        }

        x = next;
    }

    Err(Error::MaxIters {
        iters: config.max_iters(),
    })
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Univariate>(
    function: &ScalarFunction<F>,
    bracket: [f64; 2],
    precision: f64,
    config: &Config,
) -> Result<Solution<NewtonRow>, Error> {
    solve(function, bracket, precision, config, ())
}

/// Newton's method as a [`RootFinder`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Newton {
    pub config: Config,
}

impl RootFinder for Newton {
    type Row = NewtonRow;

    fn name(&self) -> &'static str {
        "newton method"
    }

    fn evaluate_root<F: Univariate>(
        &self,
        function: &ScalarFunction<F>,
        bracket: [f64; 2],
        precision: f64,
    ) -> Result<Trace<NewtonRow>, Error> {
        solve_unobserved(function, bracket, precision, &self.config).map(|solution| solution.trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn starts_on_convex_side() {
        let function = ScalarFunction::new("x^2 - 2", |x: f64| x * x - 2.0);
        let solution = solve_unobserved(&function, [0.0, 2.0], 1e-10, &Config::default())
            .expect("should converge");

        let first = solution.trace.rows()[0];
        assert_relative_eq!(first.x, 2.0);
        assert_relative_eq!(first.f_x, 2.0);
        assert_relative_eq!(first.derivative, 4.0, epsilon = 1e-6);
        assert_relative_eq!(first.next, 1.5, epsilon = 1e-6);

        assert_relative_eq!(solution.answer(), 2f64.sqrt(), epsilon = 1e-10);
        assert!(solution.iters <= 6);
    }

    #[test]
    fn rows_chain_iterates() {
        let function = ScalarFunction::new("cos(x) - x", |x: f64| x.cos() - x);
        let solution = solve_unobserved(&function, [0.0, 1.0], 1e-9, &Config::default())
            .expect("should converge");

        for pair in solution.trace.rows().windows(2) {
            assert_eq!(pair[0].next, pair[1].x);
        }
        assert_relative_eq!(solution.answer(), 0.739_085_133_2, epsilon = 1e-9);
    }

    #[test]
    fn flat_derivative_is_degenerate() {
        let function = ScalarFunction::new("1", |_x: f64| 1.0);
        let error = solve_unobserved(&function, [0.0, 1.0], 1e-4, &Config::default())
            .expect_err("zero derivative");

        assert!(matches!(error, Error::DegenerateDenominator { x, .. } if x == 1.0));
    }
}
