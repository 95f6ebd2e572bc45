//! Integration tests for the config-driven column pipeline.
//!
//! These exercise the same sequencing the host pipeline performs per column:
//! load config -> clean -> fit -> standardize, and clean -> median.

use std::fs;

use biobeat_engine::transformations::{
    apply_standardization, calculate_mean, calculate_median, calculate_std, clean_median,
    remove_invalids, scale_column, ScalingParameters,
};
use biobeat_engine::{ColumnPipeline, EngineConfig, KernelError};

// ==================== Helper Functions ====================

fn raw_column() -> Vec<f64> {
    vec![
        10.0,
        f64::NAN,
        20.0,
        f64::INFINITY,
        30.0,
        f64::NEG_INFINITY,
    ]
}

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("biobeat.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

// ==================== Manual sequencing ====================

#[test]
fn test_manual_scaling_sequence() {
    let clean = remove_invalids(&raw_column());
    assert_eq!(clean, vec![10.0, 20.0, 30.0]);

    let mean = calculate_mean(&clean);
    let std_dev = calculate_std(&clean, mean);
    assert_eq!(mean, 20.0);
    assert!((std_dev - 10.0).abs() < 1e-12);

    let scaled = apply_standardization(&clean, mean, std_dev);
    assert_eq!(scaled, vec![-1.0, 0.0, 1.0]);
}

#[test]
fn test_manual_median_sequence() {
    let clean = remove_invalids(&raw_column());
    assert_eq!(calculate_median(clean), 20.0);
    assert_eq!(clean_median(&raw_column()), 20.0);
}

#[test]
fn test_host_helper_equivalents() {
    assert_eq!(ScalingParameters::fit(&[]), ScalingParameters::new(0.0, 1.0));
    assert!(scale_column(&[], 0.0, 1.0).is_empty());

    let params = ScalingParameters::fit(&[2.0, 4.0, 6.0]);
    assert_eq!(
        scale_column(&[2.0, 4.0, 6.0], params.mean, params.std_dev),
        vec![-1.0, 0.0, 1.0]
    );
}

#[test]
fn test_fit_on_train_apply_to_test() {
    let params = ScalingParameters::fit(&[2.0, 4.0, 6.0]);
    assert_eq!(params.transform(&[8.0, 0.0]), vec![2.0, -2.0]);
}

// ==================== Config-driven pipeline ====================

#[test]
fn test_pipeline_from_config_file_lenient() {
    let (_dir, path) = write_config("[cleaning]\ndrop_invalids = true\n");
    let config = EngineConfig::from_file(&path).unwrap();
    let pipeline = ColumnPipeline::with_config(config);

    let result = pipeline.standardize(&raw_column()).unwrap();
    assert_eq!(result.dropped, 3);
    assert_eq!(result.values, vec![-1.0, 0.0, 1.0]);
    assert_eq!(pipeline.median(&raw_column()).unwrap(), 20.0);
}

#[test]
fn test_pipeline_strict_reports_kernel_error() {
    let (_dir, path) = write_config(
        r#"
[cleaning]
drop_invalids = false

[scaling]
strict = true
"#,
    );
    let pipeline = ColumnPipeline::with_config(EngineConfig::from_file(&path).unwrap());

    let err = pipeline.median(&raw_column()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<KernelError>(),
        Some(KernelError::NonFinite { index: 1, .. })
    ));
}

#[test]
fn test_pipeline_without_cleaning_propagates_nan() {
    let (_dir, path) = write_config("[cleaning]\ndrop_invalids = false\n");
    let pipeline = ColumnPipeline::with_config(EngineConfig::from_file(&path).unwrap());

    let result = pipeline.standardize(&[1.0, f64::NAN, 3.0]).unwrap();
    assert_eq!(result.dropped, 0);
    assert_eq!(result.values.len(), 3);
    assert!(result.values.iter().all(|v| v.is_nan()));
}

#[test]
fn test_invalid_config_file() {
    let (_dir, path) = write_config("[scaling]\nstrict = 1\n");
    let err = EngineConfig::from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("scaling.strict"));
}
