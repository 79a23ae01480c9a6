use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not find {path}")]
    InputMissing { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize summary to {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ReportError {
    pub fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }

    pub fn write_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteOutput {
            path: path.into(),
            source,
        }
    }
}

pub fn report_error_hint(err: &ReportError) -> Option<&'static str> {
    match err {
        ReportError::InputMissing { .. } => Some(
            "Make sure the log file exists, or point at it explicitly.\n\
             \n\
             Example:\n\
             \n\
             logtally clean --input /var/log/app.log",
        ),

        ReportError::WriteOutput { .. } => Some(
            "Check that the output directory exists and is writable.",
        ),

        _ => None,
    }
}
