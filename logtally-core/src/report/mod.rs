//! Aggregation and reporting.
//!
//! The data flow for one run is:
//!
//! input file
//! run_report (one pass, file order)
//! classify
//! LineOutcome
//! Reporter::observe
//! Reporter::finish
//! written artifacts
//!
//! Two reporters share the same pass and the same `LineTally`:
//! - **LevelReport**: counts per level, written as a short text report
//! - **CleanReport**: a cleaned copy of the log plus a JSON summary with the
//!   busiest services and the most frequent error messages
//!
//! A missing input file is detected before any reporter is built, so a failed
//! run never leaves output files behind.

mod clean_report;
mod counter;
mod error;
mod level_report;
mod render;
mod run;
mod summary;
mod tally;

#[cfg(test)]
mod tests;

pub use clean_report::{CleanReport, CleanReportOutput};
pub use counter::Counter;
pub use error::{ReportError, report_error_hint};
pub use level_report::{LevelReport, LevelReportOutput};
pub use render::render_level_report;
pub use run::{Reporter, open_input, run_clean, run_report, run_summary};
pub use summary::{ErrorCount, ServiceCount, Summary, write_summary_json};
pub use tally::{LevelCounts, LineTally};
