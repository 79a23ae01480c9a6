use crate::parse::{Level, LineOutcome};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    #[serde(rename = "INFO")]
    pub info: u64,
    #[serde(rename = "WARN")]
    pub warn: u64,
    #[serde(rename = "ERROR")]
    pub error: u64,
    /// Lines with the right shape but a level outside the accepted set.
    #[serde(rename = "INVALID_LEVEL")]
    pub invalid_level: u64,
}

impl LevelCounts {
    pub fn record(&mut self, level: Level) {
        match level {
            Level::Info => self.info += 1,
            Level::Warn => self.warn += 1,
            Level::Error => self.error += 1,
        }
    }

    pub fn accepted(&self) -> u64 {
        self.info + self.warn + self.error
    }
}

/// Line counters shared by every reporter.
///
/// Invariants: `total_lines == valid_lines() + invalid_lines()` and
/// `invalid_lines() == malformed_lines + levels.invalid_level`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    pub total_lines: u64,
    /// Blank lines and lines without exactly four fields.
    pub malformed_lines: u64,
    pub levels: LevelCounts,
}

impl LineTally {
    pub fn observe(&mut self, outcome: &LineOutcome) {
        self.total_lines += 1;

        match outcome {
            LineOutcome::Accepted { level, .. } => self.levels.record(*level),
            LineOutcome::UnknownLevel(_) => self.levels.invalid_level += 1,
            LineOutcome::Malformed(_) => self.malformed_lines += 1,
        }
    }

    pub fn valid_lines(&self) -> u64 {
        self.levels.accepted()
    }

    pub fn invalid_lines(&self) -> u64 {
        self.malformed_lines + self.levels.invalid_level
    }
}
