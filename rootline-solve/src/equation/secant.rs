//! Secant method: Newton's update with the slope through the last two
//! iterates.

use rootline_core::{Observer, ScalarFunction, Univariate};

use crate::{
    Action, Event, Solution, Status,
    record::Recorder,
    trace::{Row, Trace},
};

use super::{Config, Error, RootFinder, validate};

/// Default distance between the two starting points.
pub const DEFAULT_FIRST_OFFSET: f64 = 0.1;

/// One secant iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct SecantRow {
    pub prev: f64,
    pub x: f64,
    pub next: f64,
    pub f_next: f64,
    pub change: f64,
}

impl SecantRow {
    pub const COLUMNS: [&'static str; 5] =
        ["x_(k-1)", "x_k", "x_(k+1)", "f(x_(k+1))", "|x_(k+1) - x_k|"];
}

impl Row for SecantRow {
    type Answer = f64;

    fn columns(&self) -> Vec<String> {
        Self::COLUMNS.iter().map(|&name| name.to_owned()).collect()
    }

    fn cells(&self) -> Vec<Option<f64>> {
        vec![
            Some(self.prev),
            Some(self.x),
            Some(self.next),
            Some(self.f_next),
            Some(self.change),
        ]
    }

    fn answer(&self) -> f64 {
        self.next
    }
}

/// Finds a root of `function` by the secant method.
///
/// The first seed is the end of `bracket` Newton would start from; the
/// second lies `first_offset` away from it toward the other end. The run
/// converges once the step or `|f(x_(k+1))|` drops below `precision`.
///
/// # Errors
///
/// Returns an error if the bracket, precision, or `first_offset` is invalid,
/// if `|f(x_k) - f(x_(k-1))|` falls below `config.min_denominator()`, if the
/// function returns a non-finite value, or if `config.max_iters()`
/// iterations pass without convergence.
pub fn solve<F, Obs>(
    function: &ScalarFunction<F>,
    bracket: [f64; 2],
    precision: f64,
    first_offset: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<SecantRow>, Error>
where
    F: Univariate,
    Obs: for<'a> Observer<Event<'a, SecantRow>, Action>,
{
    let interval = validate::inputs(bracket, precision)?;
    if !(first_offset.is_finite() && first_offset > 0.0) {
        return Err(Error::InvalidParameter {
            name: "first_offset",
            reason: "must be finite and positive",
        });
    }

    let mut prev = validate::newton_start(function, &interval)?;
    #[allow(clippy::float_cmp)]
    let mut x = if prev == interval.left() {
        prev + first_offset
    } else {
        prev - first_offset
    };

    let mut f_prev = validate::value(function, prev)?;
    let mut recorder = Recorder::new(observer);

    for iter in 1..=config.max_iters() {
        let f_x = validate::value(function, x)?;
        let slope = validate::denominator(config, x, f_x - f_prev)?;

        let next = validate::finite(x, x - (x - prev) / slope * f_x)?;
        let f_next = validate::value(function, next)?;
        let change = (next - x).abs();

        let row = SecantRow {
            prev,
            x,
            next,
            f_next,
            change,
        };

        if let Some(action) = recorder.record(row) {
            match action {
                Action::StopEarly => return Ok(recorder.finish(Status::StoppedByObserver, iter)),
            }
        }

        if change < precision || f_next.abs() < precision {
            return Ok(recorder.finish(Status::Converged, iter));
        }

        prev = x;
        f_prev = f_x;
        x = next;
    }

    Err(Error::MaxIters {
        iters: config.max_iters(),
    })
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Univariate>(
    function: &ScalarFunction<F>,
    bracket: [f64; 2],
    precision: f64,
    first_offset: f64,
    config: &Config,
) -> Result<Solution<SecantRow>, Error> {
    solve(function, bracket, precision, first_offset, config, ())
}

/// The secant method as a [`RootFinder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Secant {
    /// Distance from the first seed to the second.
    pub first_offset: f64,
    pub config: Config,
}

impl Default for Secant {
    fn default() -> Self {
        Self {
            first_offset: DEFAULT_FIRST_OFFSET,
            config: Config::default(),
        }
    }
}

impl RootFinder for Secant {
    type Row = SecantRow;

    fn name(&self) -> &'static str {
        "secant method"
    }

    fn evaluate_root<F: Univariate>(
        &self,
        function: &ScalarFunction<F>,
        bracket: [f64; 2],
        precision: f64,
    ) -> Result<Trace<SecantRow>, Error> {
        solve_unobserved(function, bracket, precision, self.first_offset, &self.config)
            .map(|solution| solution.trace)
    }
}
