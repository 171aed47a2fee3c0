//! Bisection root finding for polynomials.
//!
//! # Algorithm
//!
//! Bisection repeatedly halves a bracket `[x_lower, x_upper]` across which
//! the polynomial changes sign, keeping the half that still contains the sign
//! change. The midpoint of each pass is the current root estimate.
//!
//! The loop stops when any of the following holds:
//! - the relative change between successive midpoints (in percent) drops
//!   below the configured tolerance
//! - the midpoint evaluates to within `1e-12` of zero
//! - `max_iters` passes have run
//! - the observer returns [`Action::StopEarly`]
//!
//! # Validation
//!
//! Before iterating, [`solve`] checks, in order, that the bounds are ordered,
//! that the polynomial does not have the same sign at both bounds, and that
//! the tolerance lies in (0, 100). A bound that is itself a root passes these
//! checks; use [`Bracket::new`] to reject it when collecting bounds from a user.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per pass, right after the pass is recorded
//! in the trace.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod record;
mod solution;


pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{Config, DEFAULT_MAX_ITERS};
pub use error::Error;
pub use event::Event;
pub use record::IterationRecord;
pub use solution::{Solution, Status};

use bisect_core::{Observer, Polynomial};
use log::{debug, info};

/// A midpoint whose value is below this magnitude is taken as an exact root.
const EXACT_ROOT_TOL: f64 = 1e-12;

/// A previous midpoint below this magnitude does not yield a relative error.
const NEAR_ZERO: f64 = 1e-12;

/// Relative error reported when no meaningful previous midpoint exists.
const FULL_ERROR: f64 = 100.0;

/// Finds a root of `polynomial` in `bracket` using the bisection method.
///
/// The observer receives an [`Event`] for every pass.
/// See the [module docs](self) for validation order and stopping rules.
///
/// # Errors
///
/// Returns an error if the bounds are not ordered, the polynomial has the
/// same sign at both bounds, or the tolerance is outside (0, 100).
pub fn solve<Obs>(
    polynomial: &Polynomial,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let [mut x_lower, mut x_upper] = bracket;
    if x_lower >= x_upper {
        return Err(Error::InvalidBracketOrder { x_lower, x_upper });
    }

    let mut f_lower = polynomial.evaluate(x_lower);
    let mut f_upper = polynomial.evaluate(x_upper);
    if f_lower * f_upper > 0.0 {
        return Err(Error::SameSignBounds {
            x_lower,
            x_upper,
            f_lower,
            f_upper,
        });
    }

    config.validate()?;
    let tolerance = config.tolerance;

    debug!(
        "bisecting {polynomial} on [{x_lower}, {x_upper}] to {tolerance}% (max {} iterations)",
        config.max_iters
    );

    let mut trace = Vec::new();
    let mut iteration = 0;
    let mut prev_midpoint: Option<f64> = None;
    let mut relative_error = FULL_ERROR;
    let mut stopped = None;

    // Only reported as-is when `max_iters` is zero.
    let mut midpoint = 0.5 * (x_lower + x_upper);
    let mut f_midpoint = polynomial.evaluate(midpoint);

    while iteration < config.max_iters && relative_error >= tolerance {
        midpoint = (x_lower + x_upper) / 2.0;
        f_midpoint = polynomial.evaluate(midpoint);

        relative_error = match prev_midpoint {
            Some(prev) if prev.abs() > NEAR_ZERO => ((midpoint - prev) / midpoint).abs() * 100.0,
            _ => FULL_ERROR,
        };

        let record = IterationRecord {
            iteration: iteration + 1,
            x_lower,
            f_x_lower: f_lower,
            x_upper,
            f_x_upper: f_upper,
            midpoint,
            f_midpoint,
            relative_error,
        };
        debug!(
            "{:<10} {:<12.6} {:<12.6} {:<12.6} {:<12.6} {:<12.6} {:<12.6} {:<12.6}",
            record.iteration,
            x_lower,
            f_lower,
            x_upper,
            f_upper,
            midpoint,
            f_midpoint,
            relative_error
        );

        let action = observer.observe(&Event { record: &record });
        trace.push(record);

        if let Some(Action::StopEarly) = action {
            stopped = Some(Status::StoppedByObserver);
            break;
        }

        if f_midpoint.abs() < EXACT_ROOT_TOL {
            stopped = Some(Status::ExactRoot);
            break;
        }

        if f_lower * f_midpoint < 0.0 {
            x_upper = midpoint;
            f_upper = f_midpoint;
        } else {
            x_lower = midpoint;
            f_lower = f_midpoint;
        }

        prev_midpoint = Some(midpoint);
        iteration += 1;
    }

    let status = stopped.unwrap_or(if relative_error < tolerance {
        Status::Converged
    } else {
        Status::MaxIters
    });

    info!(
        "bisection finished ({status:?}): root = {midpoint}, f(root) = {f_midpoint}, \
         error = {relative_error}% after {} iterations",
        iteration + 1
    );

    Ok(Solution {
        root: midpoint,
        f_root: f_midpoint,
        iterations: iteration + 1,
        final_error: relative_error,
        iterations_data: trace,
        status,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bounds are not ordered, the polynomial has the
/// same sign at both bounds, or the tolerance is outside (0, 100).
pub fn solve_unobserved(
    polynomial: &Polynomial,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(polynomial, bracket, config, ())
}
