use crate::conf::ReportConfig;
use crate::parse::{LineOutcome, classify};
use crate::report::clean_report::{CleanReport, CleanReportOutput};
use crate::report::error::ReportError;
use crate::report::level_report::{LevelReport, LevelReportOutput};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Something that turns a stream of classified lines into report artifacts.
pub trait Reporter {
    type Output;

    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Called once per input line, in file order.
    fn observe(&mut self, outcome: &LineOutcome) -> Result<(), ReportError>;

    /// Called once after the last line; writes whatever is still pending.
    fn finish(self) -> Result<Self::Output, ReportError>;
}

/// Opens the input for reading, mapping "not found" to `InputMissing`.
///
/// Anything that is not a regular file is rejected here, before a reporter
/// gets the chance to create its outputs.
pub fn open_input(path: &Path) -> Result<BufReader<File>, ReportError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ReportError::InputMissing {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(ReportError::read_input(path, e)),
    };

    let metadata = file
        .metadata()
        .map_err(|e| ReportError::read_input(path, e))?;
    if !metadata.is_file() {
        return Err(ReportError::read_input(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }

    Ok(BufReader::new(file))
}

/// Feeds every line of `input` through the parser into `reporter`, then
/// finishes it.
///
/// Lines are decoded lossily, so invalid UTF-8 ends up as a (probably
/// malformed) line instead of aborting the run.
pub fn run_report<B, R>(
    mut input: B,
    input_path: &Path,
    mut reporter: R,
) -> Result<R::Output, ReportError>
where
    B: BufRead,
    R: Reporter,
{
    tracing::info!(
        reporter = reporter.name(),
        input = %input_path.display(),
        "processing log file"
    );

    let mut buf = Vec::with_capacity(1024);
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = input
            .read_until(b'\n', &mut buf)
            .map_err(|e| ReportError::read_input(input_path, e))?;
        if n == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        let outcome = classify(&line);

        match &outcome {
            LineOutcome::Accepted { .. } => {}
            LineOutcome::UnknownLevel(record) => {
                tracing::debug!(line = line_no, level = %record.level, "unrecognized level");
            }
            LineOutcome::Malformed(err) => {
                tracing::debug!(line = line_no, error = %err, "malformed line");
            }
        }

        reporter.observe(&outcome)?;
    }

    tracing::info!(reporter = reporter.name(), lines = line_no, "input exhausted");
    reporter.finish()
}

/// Level counts to a text report.
pub fn run_summary(cfg: &ReportConfig) -> Result<LevelReportOutput, ReportError> {
    let input = open_input(&cfg.input_path)?;
    run_report(input, &cfg.input_path, LevelReport::new(&cfg.report_path))
}

/// Cleaned log plus JSON summary.
///
/// The input is opened before the cleaned log is created, so a missing input
/// leaves nothing behind.
pub fn run_clean(cfg: &ReportConfig) -> Result<CleanReportOutput, ReportError> {
    let input = open_input(&cfg.input_path)?;
    let reporter = CleanReport::create(&cfg.clean_log_path, &cfg.summary_path, cfg.top_n)?;
    run_report(input, &cfg.input_path, reporter)
}
