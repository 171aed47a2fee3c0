use bisect_core::Polynomial;
use thiserror::Error;

/// Errors that can occur when checking a bracket interactively.
///
/// Unlike the solver's own validation, this check also rejects a bound that
/// is itself a root: the bracket should enclose a root that is not yet known.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    #[error("Lower bound must be less than upper bound")]
    InvalidOrder { x_lower: f64, x_upper: f64 },

    #[error("Lower bound x = {x} is already a root")]
    LowerIsRoot { x: f64, f_upper: f64 },

    #[error("Upper bound x = {x} is already a root")]
    UpperIsRoot { x: f64, f_lower: f64 },

    #[error("f(x_lower) and f(x_upper) have the same sign")]
    SameSign { f_lower: f64, f_upper: f64 },
}

impl BracketError {
    /// Returns true if a bound evaluated to exactly zero.
    #[must_use]
    pub fn is_exact_root(&self) -> bool {
        matches!(self, Self::LowerIsRoot { .. } | Self::UpperIsRoot { .. })
    }

    /// Returns the polynomial values at the lower and upper bound.
    ///
    /// `None` for [`Self::InvalidOrder`], which is detected before evaluating.
    #[must_use]
    pub fn values(&self) -> Option<[f64; 2]> {
        match *self {
            Self::InvalidOrder { .. } => None,
            Self::LowerIsRoot { f_upper, .. } => Some([0.0, f_upper]),
            Self::UpperIsRoot { f_lower, .. } => Some([f_lower, 0.0]),
            Self::SameSign { f_lower, f_upper } => Some([f_lower, f_upper]),
        }
    }
}

/// Ordered bounds with a strict sign change of the polynomial between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    x_lower: f64,
    x_upper: f64,
    f_lower: f64,
    f_upper: f64,
}

impl Bracket {
    /// Evaluates `polynomial` at both bounds and checks the bracket.
    ///
    /// Checks run in order: bound ordering, lower bound is a root, upper bound
    /// is a root, same sign.
    ///
    /// # Errors
    ///
    /// Returns the first [`BracketError`] that applies.
    pub fn new(polynomial: &Polynomial, x_lower: f64, x_upper: f64) -> Result<Self, BracketError> {
        if x_lower >= x_upper {
            return Err(BracketError::InvalidOrder { x_lower, x_upper });
        }

        let f_lower = polynomial.evaluate(x_lower);
        let f_upper = polynomial.evaluate(x_upper);

        #[allow(clippy::float_cmp)]
        if f_lower == 0.0 {
            return Err(BracketError::LowerIsRoot { x: x_lower, f_upper });
        }

        #[allow(clippy::float_cmp)]
        if f_upper == 0.0 {
            return Err(BracketError::UpperIsRoot { x: x_upper, f_lower });
        }

        if f_lower * f_upper > 0.0 {
            return Err(BracketError::SameSign { f_lower, f_upper });
        }

        Ok(Self {
            x_lower,
            x_upper,
            f_lower,
            f_upper,
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.x_lower, self.x_upper]
    }

    /// Returns the polynomial values at the lower and upper bound.
    #[must_use]
    pub fn values(&self) -> [f64; 2] {
        [self.f_lower, self.f_upper]
    }
}
