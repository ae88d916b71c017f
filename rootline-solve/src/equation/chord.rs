//! Chord (false position): cut the bracket where the chord through its
//! endpoints crosses zero.

use rootline_core::{Observer, ScalarFunction, Univariate};

use crate::{
    Action, Event, Solution, Status,
    record::Recorder,
    trace::{Row, Trace},
};

use super::{Config, Error, RootFinder, validate};

/// One chord iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct ChordRow {
    pub left: f64,
    pub right: f64,
    /// Where the chord crosses zero.
    pub x: f64,
    pub f_left: f64,
    pub f_right: f64,
    pub f_x: f64,
    /// Distance from the previous crossing, or from `left` on the first row.
    pub change: f64,
}

impl ChordRow {
    pub const COLUMNS: [&'static str; 7] = [
        "a",
        "b",
        "x",
        "f(a)",
        "f(b)",
        "f(x)",
        "|x_(n+1) - x_n|",
    ];
}

impl Row for ChordRow {
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
            Some(self.change),
        ]
    }

    fn answer(&self) -> f64 {
        self.x
    }
}

/// Finds a root of `function` in `bracket` by false position.
///
/// The run converges once the bracket width, the change between successive
/// crossings, or `|f(x)|` drops below `precision`.
///
/// # Errors
///
/// Returns an error if the bracket or precision is invalid, if
/// `f(left)·f(right) > 0`, if `|f(right) - f(left)|` falls below
/// `config.min_denominator()`, if the function returns a non-finite value,
/// or if `config.max_iters()` iterations pass without convergence.
pub fn solve<F, Obs>(
    function: &ScalarFunction<F>,
    bracket: [f64; 2],
    precision: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<ChordRow>, Error>
where
    F: Univariate,
    Obs: for<'a> Observer<Event<'a, ChordRow>, Action>,
{
    let interval = validate::inputs(bracket, precision)?;

    let (mut left, mut right) = (interval.left(), interval.right());
    let mut f_left = validate::value(function, left)?;
    let mut f_right = validate::value(function, right)?;
    validate::sign_change(&interval, f_left, f_right)?;

    let mut recorder = Recorder::new(observer);
    let mut last_x = left;

    for iter in 1..=config.max_iters() {
        let slope = validate::denominator(config, left, f_right - f_left)?;
        let x = (left * f_right - right * f_left) / slope;
        let f_x = validate::value(function, x)?;
        let width = right - left;
        let change = (last_x - x).abs();

        let row = ChordRow {
            left,
            right,
            x,
            f_left,
            f_right,
            f_x,
            change,
        };

        if let Some(action) = recorder.record(row) {
            match action {
                Action::StopEarly => return Ok(recorder.finish(Status::StoppedByObserver, iter)),
            }
        }

        if width < precision || change < precision || f_x.abs() < precision {
            return Ok(recorder.finish(Status::Converged, iter));
        }

        last_x = x;
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

/// Runs the chord method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Univariate>(
    function: &ScalarFunction<F>,
    bracket: [f64; 2],
    precision: f64,
    config: &Config,
) -> Result<Solution<ChordRow>, Error> {
    solve(function, bracket, precision, config, ())
}

/// The chord method as a [`RootFinder`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Chord {
    pub config: Config,
}

impl RootFinder for Chord {
    type Row = ChordRow;

    fn name(&self) -> &'static str {
        "chord method"
    }

    fn evaluate_root<F: Univariate>(
        &self,
        function: &ScalarFunction<F>,
        bracket: [f64; 2],
        precision: f64,
    ) -> Result<Trace<ChordRow>, Error> {
        solve_unobserved(function, bracket, precision, &self.config).map(|solution| solution.trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn linear_function_is_solved_in_one_step() {
        let function = ScalarFunction::new("2x - 1", |x: f64| 2.0 * x - 1.0);
        let solution = solve_unobserved(&function, [0.0, 3.0], 1e-6, &Config::default())
            .expect("should converge");

        assert_eq!(solution.iters, 1);
        let row = solution.trace.last();
        assert_relative_eq!(row.x, 0.5);
        assert_relative_eq!(row.change, 0.5);
        assert_relative_eq!(row.f_x, 0.0);
    }

    #[test]
    fn first_change_is_measured_from_left() {
        let function = ScalarFunction::new("x^2 - 2", |x: f64| x * x - 2.0);
        let solution = solve_unobserved(&function, [0.0, 2.0], 1e-8, &Config::default())
            .expect("should converge");

        let first = solution.trace.rows()[0];
        assert_relative_eq!(first.x, 1.0);
        assert_relative_eq!(first.change, 1.0);

        let second = solution.trace.rows()[1];
        assert_relative_eq!(second.change, (second.x - first.x).abs());
        assert_relative_eq!(solution.answer(), 2f64.sqrt(), epsilon = 1e-7);
    }

    #[test]
    fn flat_chord_is_degenerate() {
        let function = ScalarFunction::new("0", |_x: f64| 0.0);
        let error = solve_unobserved(&function, [0.0, 1.0], 1e-4, &Config::default())
            .expect_err("zero slope");

        assert_eq!(error, Error::DegenerateDenominator { x: 0.0, value: 0.0 });
    }
}
