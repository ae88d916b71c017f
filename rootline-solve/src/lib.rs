//! Iterative root finders that record a trace of every iteration.
//!
//! - [`equation`] — five single-variable methods behind the
//!   [`RootFinder`](equation::RootFinder) contract
//! - [`system`] — fixed-point iteration for square systems of equations
//! - [`trace`] — the recorded rows, plus text-table and CSV rendering
//!
//! Every solver offers each recorded row to an [`Observer`] as an [`Event`]
//! and stops early on [`Action::StopEarly`].
//!
//! [`Observer`]: rootline_core::Observer

mod record;

pub mod equation;
pub mod system;
pub mod trace;

pub use record::{Action, Event, Solution, Status};
pub use trace::{Row, Trace};
