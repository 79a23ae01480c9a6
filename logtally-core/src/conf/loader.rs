use crate::conf::error::ConfigError;
use crate::conf::types::{ConfigOverrides, ReportConfig};
use crate::conf::validate::validate_config;
use std::fs;
use std::path::Path;

/// Loads a config file, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<ReportConfig, ConfigError> {
    let Some(path) = path else {
        tracing::debug!("no config file given, using defaults");
        return Ok(ReportConfig::default());
    };

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: ReportConfig = hcl::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    tracing::debug!(path = %path.display(), "config file loaded");
    Ok(cfg)
}

/// File (or defaults), then command-line overrides, then validation.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<ReportConfig, ConfigError> {
    let cfg = overrides.apply(load_config(path)?);
    validate_config(&cfg)?;
    Ok(cfg)
}
