use crate::parse::{Level, LineOutcome};
use crate::report::counter::Counter;
use crate::report::error::ReportError;
use crate::report::run::Reporter;
use crate::report::summary::{Summary, write_summary_json};
use crate::report::tally::LineTally;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Streams accepted records into a cleaned log and builds the JSON summary.
///
/// The cleaned log is created up front and written line by line in input
/// order; the summary is written once, in `finish`.
pub struct CleanReport {
    tally: LineTally,
    services: Counter,
    errors: Counter,
    clean_log: BufWriter<File>,
    clean_log_path: PathBuf,
    summary_path: PathBuf,
    top_n: usize,
}

#[derive(Debug)]
pub struct CleanReportOutput {
    pub summary: Summary,
    pub clean_log_path: PathBuf,
    pub summary_path: PathBuf,
}

impl CleanReport {
    /// Creates (or truncates) the cleaned log file.
    pub fn create(
        clean_log_path: impl AsRef<Path>,
        summary_path: impl AsRef<Path>,
        top_n: usize,
    ) -> Result<Self, ReportError> {
        let clean_log_path = clean_log_path.as_ref().to_path_buf();
        let file = File::create(&clean_log_path)
            .map_err(|e| ReportError::write_output(&clean_log_path, e))?;

        Ok(Self {
            tally: LineTally::default(),
            services: Counter::new(),
            errors: Counter::new(),
            clean_log: BufWriter::new(file),
            clean_log_path,
            summary_path: summary_path.as_ref().to_path_buf(),
            top_n,
        })
    }
}

impl Reporter for CleanReport {
    type Output = CleanReportOutput;

    fn name(&self) -> &'static str {
        "clean"
    }

    fn observe(&mut self, outcome: &LineOutcome) -> Result<(), ReportError> {
        self.tally.observe(outcome);

        let LineOutcome::Accepted { record, level } = outcome else {
            return Ok(());
        };

        self.services.increment(&record.service);
        if *level == Level::Error {
            self.errors.increment(&record.message);
        }

        writeln!(self.clean_log, "{}", record.to_clean_line())
            .map_err(|e| ReportError::write_output(&self.clean_log_path, e))
    }

    fn finish(mut self) -> Result<Self::Output, ReportError> {
        self.clean_log
            .flush()
            .map_err(|e| ReportError::write_output(&self.clean_log_path, e))?;
        tracing::info!(path = %self.clean_log_path.display(), "clean log written");

        let summary = Summary::new(&self.tally, &self.services, &self.errors, self.top_n);

        let file = File::create(&self.summary_path)
            .map_err(|e| ReportError::write_output(&self.summary_path, e))?;
        let mut writer = BufWriter::new(file);
        write_summary_json(&mut writer, &summary).map_err(|e| ReportError::Serialize {
            path: self.summary_path.clone(),
            source: e,
        })?;
        writer
            .flush()
            .map_err(|e| ReportError::write_output(&self.summary_path, e))?;
        tracing::info!(path = %self.summary_path.display(), "summary written");

        Ok(CleanReportOutput {
            summary,
            clean_log_path: self.clean_log_path,
            summary_path: self.summary_path,
        })
    }
}
