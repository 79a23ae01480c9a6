use logtally_core::conf::ReportConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding one input log and room for the outputs.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Workspace with `logs.txt` copied from `integration-tests/fixtures`.
    pub fn with_fixture(name: &str) -> Self {
        let ws = Self::empty();
        fs::copy(fixture_path(name), ws.path("logs.txt")).unwrap();
        ws
    }

    pub fn with_log(contents: &str) -> Self {
        let ws = Self::empty();
        fs::write(ws.path("logs.txt"), contents).unwrap();
        ws
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }

    /// Default file names, resolved inside the workspace.
    pub fn config(&self) -> ReportConfig {
        ReportConfig {
            input_path: self.path("logs.txt"),
            report_path: self.path("period1_report.txt"),
            clean_log_path: self.path("clean_logs.txt"),
            summary_path: self.path("summary.json"),
            top_n: 3,
        }
    }

    /// Names of every file currently in the workspace, sorted.
    pub fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}
