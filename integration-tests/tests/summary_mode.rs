use integration_tests::harness::TestWorkspace;
use logtally_core::report::run_summary;
use pretty_assertions::assert_eq;

#[test]
fn summary_mode_writes_text_report() {
    // Arrange
    let ws = TestWorkspace::with_fixture("logs.txt");

    // Act
    let output = run_summary(&ws.config()).unwrap();

    // Assert
    let expected = "\
Total lines: 15
Invalid lines: 5
INFO: 4
WARN: 1
ERROR: 5
INVALID_LEVEL: 2
";
    assert_eq!(ws.read("period1_report.txt"), expected);
    assert_eq!(output.text, expected);
    assert_eq!(ws.files(), vec!["logs.txt", "period1_report.txt"]);
}

#[test]
fn summary_mode_on_blank_file() {
    // Arrange
    let ws = TestWorkspace::with_log("\n\n\n");

    // Act
    let output = run_summary(&ws.config()).unwrap();

    // Assert
    assert_eq!(output.tally.total_lines, 3);
    assert_eq!(output.tally.invalid_lines(), 3);
    assert_eq!(output.tally.valid_lines(), 0);
}
