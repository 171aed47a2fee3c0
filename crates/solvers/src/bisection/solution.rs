use super::IterationRecord;

/// Indicates why the bisection loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The relative error dropped below the tolerance.
    Converged,
    /// The midpoint evaluated to (nearly) zero.
    ExactRoot,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final midpoint estimate.
    pub root: f64,
    /// Polynomial value at [`root`](Self::root).
    pub f_root: f64,
    /// Loop counter plus one.
    ///
    /// The counter advances only after a pass that neither found an exact
    /// root nor was stopped by the observer. A converged solve therefore
    /// reports one more than its trace length, an exact root or observer stop
    /// reports the trace length, and exhausting `max_iters` reports
    /// `max_iters + 1`.
    pub iterations: usize,
    /// Relative error of the last pass, in percent.
    pub final_error: f64,
    pub iterations_data: Vec<IterationRecord>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub status: Status,
}

impl Solution {
    /// Returns the number of rows in the trace.
    #[must_use]
    pub fn recorded_iterations(&self) -> usize {
        self.iterations_data.len()
    }
}
