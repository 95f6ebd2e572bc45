use pyo3::prelude::*;

use super::scaling::PyScalingParameters;
use super::to_py_err;
use crate::config::EngineConfig;
use crate::preprocessing::ColumnPipeline;

fn build_pipeline(config_path: Option<&str>, strict: Option<bool>) -> PyResult<ColumnPipeline> {
    let mut config = match config_path {
        Some(path) => EngineConfig::from_file(path),
        None => EngineConfig::from_default_location(),
    }
    .map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Failed to load config: {:#}", e))
    })?;

    if let Some(strict) = strict {
        config.scaling.strict = strict;
    }

    Ok(ColumnPipeline::with_config(config))
}

/// Clean and standardize one column
///
/// Args:
///     column: list of floats, may contain nan/inf
///     config_path: Optional path to biobeat.toml (default: search standard locations)
///     strict: Override `scaling.strict` from the config
///
/// Returns:
///     tuple: (scaled values, ScalingParameters, number of dropped values)
///
/// Example:
///     >>> values, params, dropped = biobeat_engine.standardize_column([2.0, 4.0, 6.0])
///     >>> params
///     ScalingParameters(mean=4.0000, std_dev=2.0000)
#[pyfunction]
#[pyo3(name = "standardize_column", signature = (column, config_path=None, strict=None))]
pub fn py_standardize_column(
    column: Vec<f64>,
    config_path: Option<&str>,
    strict: Option<bool>,
) -> PyResult<(Vec<f64>, PyScalingParameters, usize)> {
    let pipeline = build_pipeline(config_path, strict)?;
    let result = pipeline.standardize(&column).map_err(to_py_err)?;

    Ok((result.values, result.parameters.into(), result.dropped))
}

/// Median of one column using the configured cleaning and strictness
#[pyfunction]
#[pyo3(name = "median_column", signature = (column, config_path=None, strict=None))]
pub fn py_median_column(
    column: Vec<f64>,
    config_path: Option<&str>,
    strict: Option<bool>,
) -> PyResult<f64> {
    let pipeline = build_pipeline(config_path, strict)?;
    pipeline.median(&column).map_err(to_py_err)
}

pub fn register_preprocessing_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_standardize_column, m)?)?;
    m.add_function(wrap_pyfunction!(py_median_column, m)?)?;
    m.add_class::<PyScalingParameters>()?;
    Ok(())
}
