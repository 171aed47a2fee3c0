//! Core types for the bisect root finder.
//!
//! This crate defines the shared abstractions that the solver and the
//! presentation layers build on:
//!
//! - [`Polynomial`]: an immutable single-variable polynomial, highest power first
//! - [`Observer`]: receives solver events and optionally returns control actions

mod observer;
mod polynomial;

pub use observer::Observer;
pub use polynomial::{Polynomial, PolynomialError};
