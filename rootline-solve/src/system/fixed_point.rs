//! Fixed-point iteration for square systems `x = f(x)`.
//!
//! Before iterating, [`check_usability`] verifies on a grid over the search
//! box that `f` is a contraction. The trace starts with a seed row holding
//! the start point, then records one row per iteration until every
//! coordinate moves by at most the requested precision.

mod config;
mod error;
mod row;
mod usability;

pub use config::{Config, ConfigError, MAX_GRID_STEP};
pub use error::Error;
pub use row::SystemRow;
pub use usability::check_usability;

use rootline_core::{EquationSystem, Interval, Observer};

use crate::{Action, Event, Solution, Status, Trace, record::Recorder};

/// Solves `x = f(x)` for `system` by fixed-point iteration from `start`.
///
/// `intervals[i]` bounds variable `x_i`; together they form the search box
/// for both the usability check and the iteration. Observers see the seed
/// row first, then every iterate. `Solution::iters` counts iterations and
/// excludes the seed.
///
/// # Errors
///
/// Returns an error if the dimensions disagree, a start value lies outside
/// its interval, `precision` is not finite and positive, the usability check
/// fails, an iterate leaves the search box, or `config.max_iters()`
/// iterations pass without convergence.
pub fn solve<Obs>(
    system: &EquationSystem,
    intervals: &[Interval],
    start: &[f64],
    precision: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<SystemRow>, Error>
where
    Obs: for<'a> Observer<Event<'a, SystemRow>, Action>,
{
    validate_inputs(system, intervals, start, precision)?;
    check_usability(system, intervals, config)?;

    let mut recorder = Recorder::new(observer);
    if let Some(action) = recorder.record(SystemRow::seed(start)) {
        match action {
            Action::StopEarly => return Ok(recorder.finish(Status::StoppedByObserver, 0)),
        }
    }

    let mut point = start.to_vec();

    for iter in 1..=config.max_iters() {
        let next = system.apply(&point)?;

        for (variable, (&value, interval)) in next.iter().zip(intervals).enumerate() {
            if !interval.contains(value) {
                return Err(Error::LeftInterval {
                    variable,
                    value,
                    interval: *interval,
                });
            }
        }

        let changes: Vec<f64> = point
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .collect();
        let converged = changes.iter().all(|&change| change <= precision);

        let row = SystemRow {
            values: next.clone(),
            changes: Some(changes),
        };

        if let Some(action) = recorder.record(row) {
            match action {
                Action::StopEarly => return Ok(recorder.finish(Status::StoppedByObserver, iter)),
            }
        }

        if converged {
            return Ok(recorder.finish(Status::Converged, iter));
        }

        point = next;
    }

    Err(Error::MaxIters {
        iters: config.max_iters(),
    })
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(
    system: &EquationSystem,
    intervals: &[Interval],
    start: &[f64],
    precision: f64,
    config: &Config,
) -> Result<Solution<SystemRow>, Error> {
    solve(system, intervals, start, precision, config, ())
}

/// Runs fixed-point iteration with the default config and returns its trace.
///
/// # Errors
///
/// See [`solve`].
pub fn evaluate_root(
    system: &EquationSystem,
    intervals: &[Interval],
    start: &[f64],
    precision: f64,
) -> Result<Trace<SystemRow>, Error> {
    solve_unobserved(system, intervals, start, precision, &Config::default())
        .map(|solution| solution.trace)
}

/// Returns the coordinates held by the last row of `trace`.
#[must_use]
pub fn extract_answer(trace: &Trace<SystemRow>) -> Vec<f64> {
    trace.answer()
}

fn validate_inputs(
    system: &EquationSystem,
    intervals: &[Interval],
    start: &[f64],
    precision: f64,
) -> Result<(), Error> {
    let expected = system.dimension();
    if intervals.len() != expected || start.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            intervals: intervals.len(),
            start: start.len(),
        });
    }

    if !(precision.is_finite() && precision > 0.0) {
        return Err(Error::InvalidPrecision(precision));
    }

    for (variable, (&value, interval)) in start.iter().zip(intervals).enumerate() {
        if !interval.contains(value) {
            return Err(Error::StartOutsideInterval {
                variable,
                value,
                interval: *interval,
            });
        }
    }

    Ok(())
}
