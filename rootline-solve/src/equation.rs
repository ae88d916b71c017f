//! Single-variable root finders.
//!
//! Each method searches `[left, right]` for a root of a [`ScalarFunction`],
//! appending one row to a [`Trace`] per iteration until its own stopping
//! predicate holds.
//!
//! # Methods
//!
//! - [`bisection`]: halves a sign-changing bracket
//! - [`chord`]: false position along the chord of a sign-changing bracket
//! - [`newton`]: tangent steps from the endpoint where `f·f'' > 0`
//! - [`secant`]: Newton with a two-point slope
//! - [`simple_iteration`]: fixed-point iteration of `x + λ·f(x)`
//!
//! Every method module exposes `solve` (with an observer) and
//! `solve_unobserved`, and a method struct implementing [`RootFinder`]
//! for code that is generic over the method.
//!
//! All methods share [`Config`]: an iteration ceiling surfaced as
//! [`Error::MaxIters`], and the smallest denominator a method will divide by
//! before failing with [`Error::DegenerateDenominator`].
//!
//! [`ScalarFunction`]: rootline_core::ScalarFunction
//! [`Trace`]: crate::Trace

mod config;
mod error;
mod finder;
mod validate;

pub mod bisection;
pub mod chord;
pub mod newton;
pub mod secant;
pub mod simple_iteration;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use finder::RootFinder;

pub use bisection::Bisection;
pub use chord::Chord;
pub use newton::Newton;
pub use secant::Secant;
pub use simple_iteration::SimpleIteration;
