//! Reusable observers for the Rootline root finders.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in `rootline-solve`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasEstimate`], [`HasStep`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — logs each recorded row through the [`log`] facade
//! - [`StepBelow`] — stops a solver once its step drops below a tolerance
//!
//! [`Observer`]: rootline_core::Observer
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logging;
mod step;

pub use logging::LogObserver;
pub use step::StepBelow;
