use crate::parse::{Level, LineError, LineOutcome, LogRecord, classify};
use pretty_assertions::assert_eq;

fn record(level: &str) -> LogRecord {
    LogRecord {
        timestamp: "t".to_string(),
        level: level.to_string(),
        service: "svc".to_string(),
        message: "msg".to_string(),
    }
}

#[test]
fn classify_accepts_known_levels_in_any_case() {
    for (raw, expected) in [
        ("info", Level::Info),
        ("Warn", Level::Warn),
        ("eRRoR", Level::Error),
    ] {
        // Act
        let outcome = classify(&format!("t | {raw} | svc | msg"));

        // Assert
        assert_eq!(
            outcome,
            LineOutcome::Accepted {
                record: record(expected.as_str()),
                level: expected,
            }
        );
    }
}

#[test]
fn classify_flags_unknown_level() {
    // Act
    let outcome = classify("t | DEBUG | svc | msg");

    // Assert
    assert_eq!(outcome, LineOutcome::UnknownLevel(record("DEBUG")));
}

#[test]
fn classify_treats_empty_level_as_unknown() {
    assert_eq!(
        classify("t |  | svc | msg"),
        LineOutcome::UnknownLevel(record(""))
    );
}

#[test]
fn classify_reports_malformed_lines() {
    assert_eq!(classify(""), LineOutcome::Malformed(LineError::Empty));
    assert_eq!(
        classify("a | b | c"),
        LineOutcome::Malformed(LineError::FieldCount { found: 3 })
    );
}

#[test]
fn level_lookup_requires_normalized_name() {
    assert_eq!(Level::from_normalized("ERROR"), Some(Level::Error));
    assert_eq!(Level::from_normalized("error"), None);
    assert_eq!(Level::from_normalized("WARNING"), None);
}
