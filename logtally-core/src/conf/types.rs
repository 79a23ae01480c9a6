use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "logs.txt";
pub const DEFAULT_REPORT: &str = "period1_report.txt";
pub const DEFAULT_CLEAN_LOG: &str = "clean_logs.txt";
pub const DEFAULT_SUMMARY: &str = "summary.json";
pub const DEFAULT_TOP_N: usize = 3;

/// Where a run reads from and writes to.
///
/// Every field is optional in a config file; missing fields fall back to the
/// defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Pipe-delimited log file to ingest.
    pub input_path: PathBuf,

    /// Text report written by `summary`.
    pub report_path: PathBuf,

    /// Cleaned log written by `clean`.
    pub clean_log_path: PathBuf,

    /// JSON summary written by `clean`.
    pub summary_path: PathBuf,

    /// Length of the top services / top errors lists.
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            report_path: PathBuf::from(DEFAULT_REPORT),
            clean_log_path: PathBuf::from(DEFAULT_CLEAN_LOG),
            summary_path: PathBuf::from(DEFAULT_SUMMARY),
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Values given on the command line. Anything set here wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub clean_log_path: Option<PathBuf>,
    pub summary_path: Option<PathBuf>,
    pub top_n: Option<usize>,
}

impl ConfigOverrides {
    pub fn apply(self, mut cfg: ReportConfig) -> ReportConfig {
        if let Some(path) = self.input_path {
            cfg.input_path = path;
        }
        if let Some(path) = self.report_path {
            cfg.report_path = path;
        }
        if let Some(path) = self.clean_log_path {
            cfg.clean_log_path = path;
        }
        if let Some(path) = self.summary_path {
            cfg.summary_path = path;
        }
        if let Some(top_n) = self.top_n {
            cfg.top_n = top_n;
        }
        cfg
    }
}
