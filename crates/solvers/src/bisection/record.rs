/// One row of the bisection trace.
///
/// Bounds and their function values are captured before the bracket is
/// narrowed in that iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// 1-based iteration index.
    pub iteration: usize,
    pub x_lower: f64,
    pub f_x_lower: f64,
    pub x_upper: f64,
    pub f_x_upper: f64,
    pub midpoint: f64,
    pub f_midpoint: f64,
    /// Relative change of the midpoint, in percent.
    pub relative_error: f64,
}
