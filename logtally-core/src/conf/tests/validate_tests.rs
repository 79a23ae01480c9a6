use crate::conf::{ConfigError, ReportConfig, validate_config};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn defaults_are_valid() {
    assert!(validate_config(&ReportConfig::default()).is_ok());
}

#[test]
fn rejects_zero_top_n() {
    // Arrange
    let cfg = ReportConfig {
        top_n: 0,
        ..Default::default()
    };

    // Act
    let err = validate_config(&cfg).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::InvalidTopN { top_n: 0 }));
}

#[test]
fn rejects_output_that_overwrites_input() {
    // Arrange
    let cfg = ReportConfig {
        input_path: PathBuf::from("app.log"),
        clean_log_path: PathBuf::from("app.log"),
        ..Default::default()
    };

    // Act
    let err = validate_config(&cfg).unwrap_err();

    // Assert
    match err {
        ConfigError::OutputClobbersInput { path } => assert_eq!(path, PathBuf::from("app.log")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_clean_log_and_summary_sharing_a_path() {
    // Arrange
    let cfg = ReportConfig {
        clean_log_path: PathBuf::from("out.txt"),
        summary_path: PathBuf::from("out.txt"),
        ..Default::default()
    };

    // Act
    let err = validate_config(&cfg).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::DuplicateOutput { .. }));
}

fn config_in(root: &Path) -> ReportConfig {
    ReportConfig {
        input_path: root.join("logs.txt"),
        report_path: root.join("period1_report.txt"),
        clean_log_path: root.join("clean_logs.txt"),
        summary_path: root.join("summary.json"),
        top_n: 3,
    }
}

#[test]
fn rejects_output_that_reaches_input_through_parent_dir() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("logs.txt"), "t | INFO | a | m\n").unwrap();
    let cfg = ReportConfig {
        clean_log_path: root.join("sub").join("..").join("logs.txt"),
        ..config_in(root)
    };

    // Act
    let err = validate_config(&cfg).unwrap_err();

    // Assert
    match err {
        ConfigError::OutputClobbersInput { path } => assert_eq!(path, cfg.clean_log_path),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(
        fs::read_to_string(root.join("logs.txt")).unwrap(),
        "t | INFO | a | m\n"
    );
}

#[cfg(unix)]
#[test]
fn rejects_output_that_is_a_symlink_to_input() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("logs.txt"), "").unwrap();
    std::os::unix::fs::symlink(root.join("logs.txt"), root.join("alias.txt")).unwrap();
    let cfg = ReportConfig {
        report_path: root.join("alias.txt"),
        ..config_in(root)
    };

    // Act
    let err = validate_config(&cfg).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::OutputClobbersInput { .. }));
}

#[test]
fn rejects_missing_input_spelled_two_ways() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("sub")).unwrap();
    let cfg = ReportConfig {
        summary_path: root.join("sub").join("..").join("logs.txt"),
        ..config_in(root)
    };

    // Act
    let err = validate_config(&cfg).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::OutputClobbersInput { .. }));
}

#[test]
fn rejects_duplicate_outputs_spelled_differently() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("sub")).unwrap();
    let cfg = ReportConfig {
        clean_log_path: root.join("out.txt"),
        summary_path: root.join("sub").join("..").join("out.txt"),
        ..config_in(root)
    };

    // Act
    let err = validate_config(&cfg).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::DuplicateOutput { .. }));
}

#[test]
fn accepts_distinct_outputs_next_to_existing_input() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("logs.txt"), "").unwrap();

    // Act / Assert
    assert!(validate_config(&config_in(dir.path())).is_ok());
}
