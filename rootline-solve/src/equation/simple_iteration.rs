//! Simple iteration: fixed-point iteration of `g(x) = x + λ·f(x)` with
//! `λ = -1 / max|f'|` over the bracket.
//!
//! If the iterates leave the bracket, the rows are discarded and the run
//! restarts once with the sign-flipped transform `x - λ·f(x)`.

use rootline_core::{Interval, Observer, ScalarFunction, Univariate};

use crate::{
    Action, Event, Solution, Status,
    record::Recorder,
    trace::{Row, Trace},
};

use super::{Config, Error, RootFinder, validate};

/// Default number of steps used to sample `|f'|` over the bracket.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// One simple-iteration step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleIterationRow {
    pub x: f64,
    /// `g(x)`.
    pub next: f64,
    pub f_next: f64,
    pub change: f64,
}

impl SimpleIterationRow {
    pub const COLUMNS: [&'static str; 4] = ["x_k", "x_(k+1)", "f(x_(k+1))", "|x_(k+1) - x_k|"];
}

impl Row for SimpleIterationRow {
    type Answer = f64;

    fn columns(&self) -> Vec<String> {
        Self::COLUMNS.iter().map(|&name| name.to_owned()).collect()
    }

    fn cells(&self) -> Vec<Option<f64>> {
        vec![
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

/// How a single pass over one transform ended.
enum Pass {
    Finished { status: Status, iters: usize },
    Escaped { x: f64 },
}

/// Finds a root of `function` in `bracket` by simple iteration.
///
/// `λ` is derived from the largest `|f'|` found at `samples + 1` evenly
/// spaced points of the bracket. Iteration starts at the left end and
/// converges once a step is shorter than `precision` while staying inside
/// the bracket.
///
/// # Errors
///
/// Returns an error if the bracket, precision, or `samples` is invalid, if
/// `max|f'|` is below `config.min_denominator()`, if a value is non-finite,
/// if both transforms leave the bracket ([`Error::Diverged`]), or if a pass
/// runs `config.max_iters()` iterations without converging.
pub fn solve<F, Obs>(
    function: &ScalarFunction<F>,
    bracket: [f64; 2],
    precision: f64,
    samples: usize,
    config: &Config,
    observer: Obs,
) -> Result<Solution<SimpleIterationRow>, Error>
where
    F: Univariate,
    Obs: for<'a> Observer<Event<'a, SimpleIterationRow>, Action>,
{
    let interval = validate::inputs(bracket, precision)?;
    if samples == 0 {
        return Err(Error::InvalidParameter {
            name: "samples",
            reason: "must be at least 1",
        });
    }

    let slope = steepest_slope(function, &interval, samples)?;
    let lambda = -1.0 / validate::denominator(config, interval.left(), slope)?;

    let mut recorder = Recorder::new(observer);

    match run_pass(function, &interval, lambda, precision, config, &mut recorder)? {
        Pass::Finished { status, iters } => return Ok(recorder.finish(status, iters)),
        Pass::Escaped { x } => {
            log::debug!(
                "simple iteration left [{}, {}] at x = {x} with lambda = {lambda}, retrying with the sign flipped",
                interval.left(),
                interval.right(),
            );
            recorder.clear();
        }
    }

    match run_pass(function, &interval, -lambda, precision, config, &mut recorder)? {
        Pass::Finished { status, iters } => Ok(recorder.finish(status, iters)),
        Pass::Escaped { x } => Err(Error::Diverged {
            left: interval.left(),
            right: interval.right(),
            x,
        }),
    }
}

/// Runs simple iteration without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Univariate>(
    function: &ScalarFunction<F>,
    bracket: [f64; 2],
    precision: f64,
    samples: usize,
    config: &Config,
) -> Result<Solution<SimpleIterationRow>, Error> {
    solve(function, bracket, precision, samples, config, ())
}

/// Largest `|f'(x)|` over `samples + 1` evenly spaced points.
fn steepest_slope<F: Univariate>(
    function: &ScalarFunction<F>,
    interval: &Interval,
    samples: usize,
) -> Result<f64, Error> {
    #[allow(clippy::cast_precision_loss)]
    let step = interval.width() / samples as f64;

    (0..=samples).try_fold(0.0_f64, |steepest, i| {
        #[allow(clippy::cast_precision_loss)]
        let x = (interval.left() + step * i as f64).min(interval.right());
        let slope = validate::derivative(function, x)?;
        Ok(steepest.max(slope.abs()))
    })
}

/// Iterates `x + coefficient·f(x)` from the left end of `interval`.
fn run_pass<F, Obs>(
    function: &ScalarFunction<F>,
    interval: &Interval,
    coefficient: f64,
    precision: f64,
    config: &Config,
    recorder: &mut Recorder<SimpleIterationRow, Obs>,
) -> Result<Pass, Error>
where
    F: Univariate,
    Obs: for<'a> Observer<Event<'a, SimpleIterationRow>, Action>,
{
    let mut x = interval.left();

    for iter in 1..=config.max_iters() {
        let next = validate::finite(x, x + coefficient * validate::value(function, x)?)?;
        let f_next = validate::value(function, next)?;
        let change = (next - x).abs();

        let row = SimpleIterationRow {
            x,
            next,
            f_next,
            change,
        };

        if let Some(action) = recorder.record(row) {
            match action {
                Action::StopEarly => {
                    return Ok(Pass::Finished {
                        status: Status::StoppedByObserver,
                        iters: iter,
                    });
                }
            }
        }

        if !interval.contains(next) {
            return Ok(Pass::Escaped { x: next });
        }

        if change < precision {
            return Ok(Pass::Finished {
                status: Status::Converged,
                iters: iter,
            });
        }

        x = next;
    }

    Err(Error::MaxIters {
        iters: config.max_iters(),
    })
}

/// Simple iteration as a [`RootFinder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleIteration {
    /// Steps used to sample `|f'|` over the bracket.
    pub samples: usize,
    pub config: Config,
}

impl Default for SimpleIteration {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            config: Config::default(),
        }
    }
}

impl RootFinder for SimpleIteration {
    type Row = SimpleIterationRow;

    fn name(&self) -> &'static str {
        "simple iteration method"
    }

    fn evaluate_root<F: Univariate>(
        &self,
        function: &ScalarFunction<F>,
        bracket: [f64; 2],
        precision: f64,
    ) -> Result<Trace<SimpleIterationRow>, Error> {
        solve_unobserved(function, bracket, precision, self.samples, &self.config)
            .map(|solution| solution.trace)
    }
}
