use crate::report::tally::LineTally;

/// Human-readable level report, one labeled count per line.
pub fn render_level_report(tally: &LineTally) -> String {
    let levels = &tally.levels;

    format!(
        "Total lines: {}\n\
         Invalid lines: {}\n\
         INFO: {}\n\
         WARN: {}\n\
         ERROR: {}\n\
         INVALID_LEVEL: {}\n",
        tally.total_lines,
        tally.invalid_lines(),
        levels.info,
        levels.warn,
        levels.error,
        levels.invalid_level
    )
}
