use bisect_solvers::bisection::IterationRecord;

/// Width of the rule printed under the trace header.
const RULE_WIDTH: usize = 100;

/// Column header for the iteration trace, followed by a rule.
pub fn header() -> String {
    format!(
        "{:<10} {:<12} {:<12} {:<12} {:<12} {:<12} {:<12} {:<12}\n{}",
        "Iteration",
        "x_lower",
        "f(x_lower)",
        "x_upper",
        "f(x_upper)",
        "midpoint",
        "f(midpoint)",
        "Error %",
        "-".repeat(RULE_WIDTH)
    )
}

/// One trace row, six decimals per value.
pub fn row(record: &IterationRecord) -> String {
    format!(
        "{:<10} {:<12.6} {:<12.6} {:<12.6} {:<12.6} {:<12.6} {:<12.6} {:<12.6}",
        record.iteration,
        record.x_lower,
        record.f_x_lower,
        record.x_upper,
        record.f_x_upper,
        record.midpoint,
        record.f_midpoint,
        record.relative_error
    )
}
