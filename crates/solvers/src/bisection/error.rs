use thiserror::Error;

/// Errors reported by the bisection solver before any iteration runs.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("Lower bound must be less than upper bound")]
    InvalidBracketOrder { x_lower: f64, x_upper: f64 },

    #[error("Function must have opposite signs at lower and upper bounds")]
    SameSignBounds {
        x_lower: f64,
        x_upper: f64,
        f_lower: f64,
        f_upper: f64,
    },

    #[error("Tolerance must be between 0 and 100")]
    InvalidTolerance { tolerance: f64 },
}
