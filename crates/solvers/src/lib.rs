//! Numerical solvers for the bisect root finder.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a sign-changing bracket

pub mod bisection;
