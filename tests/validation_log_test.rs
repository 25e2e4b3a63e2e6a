//! Tests for compliance verification and the validation log: warning
//! counts, header-once behavior, interval throttling, Strouhal clamping,
//! and designated-writer gating.

use std::fs;
use std::path::PathBuf;

use ibkin_rs::swimmer::{PositionUpdatePolicy, UndulatingFoil};
use ibkin_rs::{
    KinematicConfig, KinematicOptions, Kinematics, MeshSpacing, PerformanceSample, RigidPose,
    ValidationLogger, computed_strouhal,
};
use tempfile::tempdir;

fn spacing() -> MeshSpacing {
    MeshSpacing { dx: 0.05, dy: 0.02 }
}

fn logging_options(log_path: PathBuf) -> KinematicOptions {
    KinematicOptions {
        log_path,
        designated_writer: true,
        write_validation_data: true,
        ..Default::default()
    }
}

#[test]
fn test_mismatched_amplitude_single_warning_and_override() {
    let options = KinematicOptions {
        base_amplitude: 0.125,
        write_validation_data: false,
        designated_writer: false,
        ..Default::default()
    };
    let (config, report) = KinematicConfig::from_options(&options);
    assert_eq!(report.mismatches.len(), 1);
    assert_eq!(config.a_max, 0.1);
}

#[test]
fn test_all_reference_parameters_checked() {
    let options = KinematicOptions {
        base_amplitude: 0.125,
        reynolds: 1000.0,
        enable_adaptation: true,
        write_validation_data: false,
        designated_writer: false,
        ..Default::default()
    };
    let (config, report) = KinematicConfig::from_options(&options);
    assert_eq!(report.mismatches.len(), 3);
    assert_eq!(config.a_max, 0.1);
    assert_eq!(config.reynolds, 5000.0);
}

#[test]
fn test_header_written_once_then_rows_appended() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("validation.dat");
    let mut foil = UndulatingFoil::new(
        &logging_options(path.clone()),
        spacing(),
        PositionUpdatePolicy::ShapeTracking,
    );
    foil.set_performance(0.5, 0.01, 0.002);

    // Default interval is 0.05; drive 11 substeps of 0.01 -> 3 rows
    for step in 0..=10 {
        let t = step as f64 * 0.01;
        foil.set_kinematics_velocity(t, RigidPose::default()).unwrap();
        foil.set_shape(t).unwrap();
    }

    let contents = fs::read_to_string(&path).unwrap();
    let header_lines = contents.lines().filter(|l| l.starts_with('#')).count();
    let data_lines: Vec<&str> = contents.lines().filter(|l| !l.starts_with('#')).collect();

    assert_eq!(header_lines, 8);
    assert_eq!(data_lines.len(), 3); // t = 0.00, 0.05, 0.10

    // Row format: 7 whitespace-separated scientific-notation columns
    for row in &data_lines {
        let cols: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(cols.len(), 7);
        for col in cols {
            assert!(col.contains('e'), "column not scientific notation: {col}");
            col.parse::<f64>().unwrap();
        }
    }

    // Speed 0.5, f = 2, A_max = 0.1 -> computed St = 0.8 in the last column
    let last_cols: Vec<f64> = data_lines[0]
        .split_whitespace()
        .map(|c| c.parse().unwrap())
        .collect();
    assert!((last_cols[3] - 0.5).abs() < 1e-12);
    assert!((last_cols[6] - 0.8).abs() < 1e-12);
}

#[test]
fn test_strouhal_clamped_for_stationary_body() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("validation.dat");
    let mut foil = UndulatingFoil::new(
        &logging_options(path.clone()),
        spacing(),
        PositionUpdatePolicy::ShapeTracking,
    );
    // Speed defaults to zero: diagnostic St must be 0, not inf/NaN
    foil.set_kinematics_velocity(0.0, RigidPose::default()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let row = contents.lines().find(|l| !l.starts_with('#')).unwrap();
    let st: f64 = row.split_whitespace().last().unwrap().parse().unwrap();
    assert_eq!(st, 0.0);

    assert_eq!(computed_strouhal(2.0, 0.1, 1e-12), 0.0);
    assert!((computed_strouhal(2.0, 0.1, 0.8) - 0.5).abs() < 1e-12);
}

#[test]
fn test_non_designated_writer_creates_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("validation.dat");
    let options = KinematicOptions {
        designated_writer: false,
        ..logging_options(path.clone())
    };
    let mut foil = UndulatingFoil::new(&options, spacing(), PositionUpdatePolicy::ShapeTracking);

    for step in 0..=10 {
        let t = step as f64 * 0.01;
        foil.set_kinematics_velocity(t, RigidPose::default()).unwrap();
    }
    assert!(!path.exists());
}

#[test]
fn test_resumed_logger_appends_without_second_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("validation.dat");
    let (config, _) = KinematicConfig::from_options(&KinematicOptions::default());
    let kinematics = Kinematics::new(config);

    let mut logger = ValidationLogger::new(&path, 0.05, true, true);
    logger
        .record(&kinematics, 0.0, PerformanceSample::default())
        .unwrap();
    logger
        .record(&kinematics, 0.05, PerformanceSample::default())
        .unwrap();

    // Simulate a restart at t = 0.05
    let mut resumed = ValidationLogger::new(&path, 0.05, true, true);
    resumed.resume(0.05);
    assert!(resumed.record(&kinematics, 0.07, PerformanceSample::default()).unwrap().is_none());
    resumed
        .record(&kinematics, 0.10, PerformanceSample::default())
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().filter(|l| l.starts_with('#')).count(), 8);
    assert_eq!(contents.lines().filter(|l| !l.starts_with('#')).count(), 3);
}
