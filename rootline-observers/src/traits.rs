//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific row types, enabling observers
//! to work generically across different methods.
//!
//! # Event traits
//!
//! - [`HasEstimate`]: events that carry the current root estimate
//! - [`HasStep`]: events that carry the size of the latest step
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootline_core::Observer;
//! use rootline_observers::traits::{CanStopEarly, HasEstimate};
//!
//! /// Stops once the estimate passes a threshold.
//! struct Past {
//!     threshold: f64,
//! }
//!
//! impl<E: HasEstimate, A: CanStopEarly> Observer<E, A> for Past {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.estimate() > self.threshold).then(A::stop_early)
//!     }
//! }
//! ```

use rootline_solve::{
    Action, Event, Row,
    equation::{
        bisection::BisectionRow, chord::ChordRow, newton::NewtonRow, secant::SecantRow,
        simple_iteration::SimpleIterationRow,
    },
    system::fixed_point::SystemRow,
};

/// An event that carries the current root estimate.
pub trait HasEstimate {
    /// Returns the estimate recorded with this event.
    fn estimate(&self) -> f64;
}

/// An event that carries the size of the latest step.
pub trait HasStep {
    /// Returns the step size, or `None` if no step was taken yet.
    fn step(&self) -> Option<f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasEstimate for scalar events ---

impl<R: Row<Answer = f64>> HasEstimate for Event<'_, R> {
    fn estimate(&self) -> f64 {
        self.row.answer()
    }
}

// --- HasStep impls ---

impl HasStep for Event<'_, BisectionRow> {
    fn step(&self) -> Option<f64> {
        Some(self.row.width)
    }
}

impl HasStep for Event<'_, ChordRow> {
    fn step(&self) -> Option<f64> {
        Some(self.row.change)
    }
}

impl HasStep for Event<'_, NewtonRow> {
    fn step(&self) -> Option<f64> {
        Some(self.row.change)
    }
}

impl HasStep for Event<'_, SecantRow> {
    fn step(&self) -> Option<f64> {
        Some(self.row.change)
    }
}

impl HasStep for Event<'_, SimpleIterationRow> {
    fn step(&self) -> Option<f64> {
        Some(self.row.change)
    }
}

impl HasStep for Event<'_, SystemRow> {
    fn step(&self) -> Option<f64> {
        self.row.max_change()
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
