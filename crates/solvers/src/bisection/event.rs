use super::IterationRecord;

/// Event emitted by the bisection solver once per iteration.
///
/// The event is emitted after the iteration is recorded and before the
/// exact-root check and bracket update.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The record just appended to the trace.
    pub record: &'a IterationRecord,
}

impl Event<'_> {
    /// Returns the 1-based iteration index.
    #[must_use]
    pub fn iteration(&self) -> usize {
        self.record.iteration
    }
}
