mod error;
mod loader;
mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{load_config, resolve_config};
pub use types::{ConfigOverrides, ReportConfig};
pub use validate::validate_config;
