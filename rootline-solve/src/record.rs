use rootline_core::Observer;

use crate::trace::{Row, Trace};

/// Control actions supported by every Rootline solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the trace recorded so far.
    StopEarly,
}

/// Event emitted each time a solver records a trace row.
#[derive(Debug)]
pub struct Event<'a, R> {
    /// Number of rows recorded so far in the current run (1-based).
    pub iter: usize,
    /// The row that was just recorded.
    pub row: &'a R,
}

/// Indicates why a solver returned successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The method's stopping predicate held.
    Converged,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a solve: the final status plus the full iteration trace.
#[derive(Debug, Clone)]
pub struct Solution<R> {
    /// Final solver status.
    pub status: Status,
    /// Number of iterations performed.
    pub iters: usize,
    /// Every recorded row, in iteration order.
    pub trace: Trace<R>,
}

impl<R: Row> Solution<R> {
    /// Returns the answer projected from the last trace row.
    #[must_use]
    pub fn answer(&self) -> R::Answer {
        self.trace.answer()
    }
}

/// Collects trace rows and forwards each one to the observer.
pub(crate) struct Recorder<R, Obs> {
    rows: Vec<R>,
    observer: Obs,
}

impl<R, Obs> Recorder<R, Obs>
where
    R: Row,
    Obs: for<'a> Observer<Event<'a, R>, Action>,
{
    pub(crate) fn new(observer: Obs) -> Self {
        Self {
            rows: Vec::new(),
            observer,
        }
    }

    /// Number of rows recorded so far.
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Appends a row and returns the observer's action for it.
    pub(crate) fn record(&mut self, row: R) -> Option<Action> {
        self.rows.push(row);
        let iter = self.rows.len();
        let event = Event {
            iter,
            row: &self.rows[iter - 1],
        };
        self.observer.observe(&event)
    }

    /// Drops every recorded row, keeping the observer.
    pub(crate) fn clear(&mut self) {
        self.rows.clear();
    }

    /// Finishes the run. Must only be called after at least one row.
    pub(crate) fn finish(self, status: Status, iters: usize) -> Solution<R> {
        Solution {
            status,
            iters,
            trace: Trace::from_rows(self.rows),
        }
    }
}
