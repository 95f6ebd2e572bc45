use anyhow::{Context, Result};

use crate::config::EngineConfig;
use crate::transformations::{
    calculate_median, remove_invalids, try_calculate_median, Column, ScalingParameters,
};

/// Result of standardizing one column
#[derive(Debug, Clone, PartialEq)]
pub struct StandardizedColumn {
    pub parameters: ScalingParameters,
    pub values: Column,
    /// Number of non-finite values removed before fitting.
    pub dropped: usize,
}

/// Per-column cleaning and scaling driven by an [`EngineConfig`].
///
/// The pipeline keeps only its configuration; every call works on its own
/// copy of the column.
#[derive(Debug, Clone, Default)]
pub struct ColumnPipeline {
    config: EngineConfig,
}

impl ColumnPipeline {
    /// Create a new pipeline with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Median of a column.
    ///
    /// In strict mode an empty or non-finite column is an error instead of
    /// the `0.0` sentinel.
    pub fn median(&self, column: &[f64]) -> Result<f64> {
        let (working, dropped) = self.prepare(column);
        log::debug!(
            "Median over {} values ({} dropped)",
            working.len(),
            dropped
        );

        if self.config.scaling.strict {
            try_calculate_median(working).context("Failed to compute median")
        } else {
            Ok(calculate_median(working))
        }
    }

    /// Fit scaling parameters on a column and standardize it.
    ///
    /// # Returns
    /// StandardizedColumn with the fitted parameters, the scaled values and the
    /// number of dropped invalid values
    pub fn standardize(&self, column: &[f64]) -> Result<StandardizedColumn> {
        let (working, dropped) = self.prepare(column);

        let parameters = if self.config.scaling.strict {
            ScalingParameters::try_fit(&working).context("Failed to fit scaling parameters")?
        } else {
            ScalingParameters::fit(&working)
        };

        log::debug!(
            "Fitted mean={:.4} std={:.4} over {} values ({} dropped)",
            parameters.mean,
            parameters.std_dev,
            working.len(),
            dropped
        );

        let values = parameters.transform(&working);

        Ok(StandardizedColumn {
            parameters,
            values,
            dropped,
        })
    }

    /// Copy the column, dropping invalid values when configured.
    fn prepare(&self, column: &[f64]) -> (Column, usize) {
        if !self.config.cleaning.drop_invalids {
            return (column.to_vec(), 0);
        }

        let clean = remove_invalids(column);
        let dropped = column.len() - clean.len();
        if clean.is_empty() && !column.is_empty() {
            log::warn!(
                "All {} values were invalid; column is empty after cleaning",
                column.len()
            );
        }
        (clean, dropped)
    }
}
