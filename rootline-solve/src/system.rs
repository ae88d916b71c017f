//! Solvers for square systems of equations.
//!
//! - [`fixed_point`]: simple iteration `x^(k+1) = f(x^k)`, guarded by a
//!   contraction check over the search box

pub mod fixed_point;
