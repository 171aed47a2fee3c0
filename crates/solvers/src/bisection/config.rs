use super::Error;

/// Iteration cap used when none is given.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Configuration for the bisection solver.
///
/// `tolerance` is a relative-error percentage and must lie strictly between
/// 0 and 100. It is checked by the solver after the bracket, so an invalid
/// bracket is reported ahead of an invalid tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub tolerance: f64,
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            max_iters: DEFAULT_MAX_ITERS,
        }
    }
}

impl Config {
    /// Creates a config with the given tolerance and the default iteration cap.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Replaces the iteration cap.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Validates that the tolerance lies in the open interval (0, 100).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] otherwise, including for NaN.
    pub fn validate(&self) -> Result<(), Error> {
        if self.tolerance > 0.0 && self.tolerance < 100.0 {
            Ok(())
        } else {
            Err(Error::InvalidTolerance {
                tolerance: self.tolerance,
            })
        }
    }
}
