use std::fmt::{Display, Formatter};

/// The closed set of accepted log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// Looks up an already normalized level name.
    ///
    /// Matching is exact: callers upper-case first via [`normalize_level`].
    pub fn from_normalized(name: &str) -> Option<Self> {
        match name {
            "INFO" => Some(Level::Info),
            "WARN" => Some(Level::Warn),
            "ERROR" => Some(Level::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn normalize_level(level: &str) -> String {
    level.to_uppercase()
}
