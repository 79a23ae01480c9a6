use crate::conf::error::ConfigError;
use crate::conf::types::ReportConfig;
use std::fs;
use std::path::{Path, PathBuf};

pub fn validate_config(cfg: &ReportConfig) -> Result<(), ConfigError> {
    if cfg.top_n == 0 {
        return Err(ConfigError::InvalidTopN { top_n: cfg.top_n });
    }

    let input = file_identity(&cfg.input_path);
    for output in [&cfg.report_path, &cfg.clean_log_path, &cfg.summary_path] {
        if file_identity(output) == input {
            return Err(ConfigError::OutputClobbersInput {
                path: output.clone(),
            });
        }
    }

    // Both are written by the same `clean` run.
    if file_identity(&cfg.clean_log_path) == file_identity(&cfg.summary_path) {
        return Err(ConfigError::DuplicateOutput {
            path: cfg.clean_log_path.clone(),
        });
    }

    Ok(())
}

/// Resolves `path` to the file it would actually open, so `a/../x`, a
/// symlink and an absolute spelling of the same file compare equal.
///
/// Files that do not exist yet resolve through their parent directory. If the
/// parent is missing too, the path is compared as written.
fn file_identity(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }

    let Some(name) = path.file_name() else {
        return path.to_path_buf();
    };
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    match fs::canonicalize(parent) {
        Ok(dir) => dir.join(name),
        Err(_) => path.to_path_buf(),
    }
}
