use crate::conf::{ConfigOverrides, ReportConfig, resolve_config};
use crate::report::{ReportError, report_error_hint, run_clean, run_summary};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Options shared by every command that reads a log file.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Path to an HCL config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file to read
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Where to write the text report
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Where to write the cleaned log
    #[arg(long)]
    pub clean_log: Option<PathBuf>,

    /// Where to write the JSON summary
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Number of entries in the top services / top errors lists
    #[arg(long)]
    pub top: Option<usize>,
}

impl SummaryArgs {
    pub fn resolve(self) -> Result<ReportConfig> {
        let overrides = ConfigOverrides {
            input_path: self.input.input,
            report_path: self.output,
            ..Default::default()
        };
        Ok(resolve_config(self.input.config.as_deref(), overrides)?)
    }
}

impl CleanArgs {
    pub fn resolve(self) -> Result<ReportConfig> {
        let overrides = ConfigOverrides {
            input_path: self.input.input,
            clean_log_path: self.clean_log,
            summary_path: self.summary,
            top_n: self.top,
            ..Default::default()
        };
        Ok(resolve_config(self.input.config.as_deref(), overrides)?)
    }
}

/// Level counts: print the report and save it.
pub fn summary(args: SummaryArgs) -> Result<()> {
    let cfg = args.resolve()?;

    match run_summary(&cfg) {
        Ok(output) => {
            print!("{}", output.text);
            tracing::info!(
                total = output.tally.total_lines,
                invalid = output.tally.invalid_lines(),
                "summary complete"
            );
            Ok(())
        }
        Err(err) => exit_with_report_error(err),
    }
}

/// Cleaned log and JSON summary.
pub fn clean(args: CleanArgs) -> Result<()> {
    let cfg = args.resolve()?;

    match run_clean(&cfg) {
        Ok(output) => {
            println!("Summary saved to {}", output.summary_path.display());
            println!("Clean logs saved to {}", output.clean_log_path.display());
            tracing::info!(
                total = output.summary.total_lines,
                valid = output.summary.valid_lines,
                invalid = output.summary.invalid_lines,
                "clean complete"
            );
            Ok(())
        }
        Err(err) => exit_with_report_error(err),
    }
}

fn exit_with_report_error(err: ReportError) -> ! {
    print_report_error(&err);
    std::process::exit(1);
}

fn print_report_error(err: &ReportError) {
    eprintln!("ERROR: {err}");

    if let Some(hint) = report_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}
