use crate::parse::level::{Level, normalize_level};
use crate::parse::record::LogRecord;
use thiserror::Error;

const FIELD_COUNT: usize = 4;
const DELIMITER: char = '|';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("empty line")]
    Empty,

    #[error("expected {FIELD_COUNT} fields, found {found}")]
    FieldCount { found: usize },
}

/// Result of running one raw line through the parser and level check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Correct shape and a recognized level.
    Accepted { record: LogRecord, level: Level },
    /// Correct shape, but the normalized level is outside the accepted set.
    UnknownLevel(LogRecord),
    Malformed(LineError),
}

/// Splits a raw line into its four trimmed fields, without interpreting them.
pub fn split_fields(line: &str) -> Result<[&str; FIELD_COUNT], LineError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(LineError::Empty);
    }

    let parts: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();

    <[&str; FIELD_COUNT]>::try_from(parts.as_slice())
        .map_err(|_| LineError::FieldCount { found: parts.len() })
}

pub fn parse_line(line: &str) -> Result<LogRecord, LineError> {
    let [timestamp, level, service, message] = split_fields(line)?;

    Ok(LogRecord {
        timestamp: timestamp.to_string(),
        level: normalize_level(level),
        service: service.to_string(),
        message: message.to_string(),
    })
}

pub fn classify(line: &str) -> LineOutcome {
    let record = match parse_line(line) {
        Ok(record) => record,
        Err(err) => return LineOutcome::Malformed(err),
    };

    match Level::from_normalized(&record.level) {
        Some(level) => LineOutcome::Accepted { record, level },
        None => LineOutcome::UnknownLevel(record),
    }
}
