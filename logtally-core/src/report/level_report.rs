use crate::parse::LineOutcome;
use crate::report::error::ReportError;
use crate::report::render::render_level_report;
use crate::report::run::Reporter;
use crate::report::tally::LineTally;
use std::fs;
use std::path::{Path, PathBuf};

/// Counts lines per level and writes them as a text report.
///
/// Nothing is written until `finish`.
pub struct LevelReport {
    tally: LineTally,
    report_path: PathBuf,
}

#[derive(Debug)]
pub struct LevelReportOutput {
    pub tally: LineTally,
    pub text: String,
    pub report_path: PathBuf,
}

impl LevelReport {
    pub fn new(report_path: impl AsRef<Path>) -> Self {
        Self {
            tally: LineTally::default(),
            report_path: report_path.as_ref().to_path_buf(),
        }
    }
}

impl Reporter for LevelReport {
    type Output = LevelReportOutput;

    fn name(&self) -> &'static str {
        "summary"
    }

    fn observe(&mut self, outcome: &LineOutcome) -> Result<(), ReportError> {
        self.tally.observe(outcome);
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, ReportError> {
        let text = render_level_report(&self.tally);

        fs::write(&self.report_path, &text)
            .map_err(|e| ReportError::write_output(&self.report_path, e))?;
        tracing::info!(path = %self.report_path.display(), "level report written");

        Ok(LevelReportOutput {
            tally: self.tally,
            text,
            report_path: self.report_path,
        })
    }
}
