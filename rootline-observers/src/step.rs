use rootline_core::Observer;

use crate::traits::{CanStopEarly, HasStep};

/// Stops a solver once its step is shorter than `tolerance`.
///
/// Lets a caller settle for a looser answer than the precision passed to the
/// solver, for example to cap the work spent on a preview. Events without a
/// step, such as a system solver's seed row, never stop the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepBelow {
    pub tolerance: f64,
}

impl StepBelow {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StepBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        match event.step() {
            Some(step) if step < self.tolerance => Some(A::stop_early()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootline_core::{EquationSystem, Interval, ScalarFunction, VectorFunction};
    use rootline_solve::{
        Status,
        equation::{Config, bisection, newton},
        system::fixed_point,
    };

    #[test]
    fn stops_bisection_on_coarse_width() {
        let function = ScalarFunction::new("x - 0.3", |x: f64| x - 0.3);
        let solution = bisection::solve(
            &function,
            [0.0, 1.0],
            1e-12,
            &Config::default(),
            StepBelow::new(0.1),
        )
        .expect("stops early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        // Widths 1, 1/2, ..., 1/16: the fifth row is the first below 0.1.
        assert_eq!(solution.trace.len(), 5);
        assert!(solution.trace.last().width < 0.1);
    }

    #[test]
    fn loose_tolerance_never_beats_convergence() {
        let function = ScalarFunction::new("x^2 - 2", |x: f64| x * x - 2.0);
        let solution = newton::solve(
            &function,
            [0.0, 2.0],
            1e-4,
            &Config::default(),
            StepBelow::new(1e-300),
        )
        .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
    }

    #[test]
    fn system_seed_row_does_not_stop() {
        let system = EquationSystem::new(
            "half",
            vec![VectorFunction::new("x0 / 2", 1, |x: &[f64]| x[0] / 2.0)],
        )
        .expect("square system");
        let bounds = [Interval::new(0.0, 1.0).expect("valid interval")];

        let solution = fixed_point::solve(
            &system,
            &bounds,
            &[1.0],
            1e-12,
            &fixed_point::Config::default(),
            StepBelow::new(0.3),
        )
        .expect("stops early");

        // Steps 0.5, 0.25: stop on the second iterate.
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_eq!(solution.trace.len(), 3);
    }
}
