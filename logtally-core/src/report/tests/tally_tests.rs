use crate::parse::classify;
use crate::report::{LevelCounts, LineTally};
use pretty_assertions::assert_eq;

fn tally_of(lines: &[&str]) -> LineTally {
    let mut tally = LineTally::default();
    for line in lines {
        tally.observe(&classify(line));
    }
    tally
}

#[test]
fn counts_each_outcome_once() {
    // Act
    let tally = tally_of(&[
        "t | info | svc | m",
        "t | WARN | svc | m",
        "t | error | svc | m",
        "t | DEBUG | svc | m",
        "a | b | c",
        "",
    ]);

    // Assert
    assert_eq!(
        tally,
        LineTally {
            total_lines: 6,
            malformed_lines: 2,
            levels: LevelCounts {
                info: 1,
                warn: 1,
                error: 1,
                invalid_level: 1,
            },
        }
    );
    assert_eq!(tally.valid_lines(), 3);
    assert_eq!(tally.invalid_lines(), 3);
}

#[test]
fn totals_always_balance() {
    // Act
    let tally = tally_of(&[
        "x",
        "t | TRACE | svc | m",
        "t | info | svc | m",
        "   ",
        "t | info | svc | m | extra",
        "t | Warn | svc | m",
    ]);

    // Assert
    assert_eq!(tally.total_lines, tally.valid_lines() + tally.invalid_lines());
    assert_eq!(
        tally.total_lines,
        tally.malformed_lines
            + tally.levels.invalid_level
            + tally.levels.info
            + tally.levels.warn
            + tally.levels.error
    );
}

#[test]
fn blank_lines_are_invalid() {
    // Act
    let tally = tally_of(&["", "  ", "\t"]);

    // Assert
    assert_eq!(tally.total_lines, 3);
    assert_eq!(tally.valid_lines(), 0);
    assert_eq!(tally.invalid_lines(), 3);
    assert_eq!(tally.levels.invalid_level, 0);
}
