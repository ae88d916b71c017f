//! Core types for the Rootline root finders.
//!
//! This crate defines the objects that solvers query while they iterate:
//!
//! - [`Univariate`], [`Multivariate`] — capability traits for evaluating a
//!   function of one or many variables
//! - [`ScalarFunction`] — a labeled function of one variable with blended
//!   finite-difference derivatives and a single-root test
//! - [`VectorFunction`], [`EquationSystem`] — labeled coordinate functions and
//!   the square systems built from them
//! - [`Interval`] — a validated `[left, right]` range
//! - [`Observer`] — receives solver events and optionally returns control actions

pub mod derivative;

mod function;
mod interval;
mod observer;
mod scalar;
mod system;
mod vector;

pub use function::{Multivariate, Univariate};
pub use interval::{Interval, IntervalError, MAX_GRID_POINTS};
pub use observer::Observer;
pub use scalar::ScalarFunction;
pub use system::{EquationSystem, SystemError};
pub use vector::{ArgumentError, VectorFunction};
