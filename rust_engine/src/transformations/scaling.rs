//! Standard (z-score) scaling of a column.
//!
//! The kernels here are total: an empty column has mean `0.0`, and
//! [`calculate_std`] never returns anything that is unsafe to divide by for
//! finite input. The caller owns the ordering `mean -> std -> standardize`;
//! nothing checks that the `mean` handed to [`calculate_std`] or
//! [`apply_standardization`] belongs to the column.

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};
use crate::transformations::cleaning::validate_column;
use crate::transformations::Column;

/// Arithmetic mean of a column, or `0.0` when empty.
pub fn calculate_mean(column: &[f64]) -> f64 {
    if column.is_empty() {
        return 0.0;
    }

    let sum: f64 = column.iter().sum();
    sum / column.len() as f64
}

/// Sample standard deviation (Bessel's correction) around a precomputed mean.
///
/// Returns `1.0` for columns with fewer than two values and for zero variance,
/// so the result can always be used as a divisor.
///
/// # Examples
///
/// ```
/// use biobeat_engine::transformations::calculate_std;
///
/// assert_eq!(calculate_std(&[2.0, 4.0, 6.0], 4.0), 2.0);
/// assert_eq!(calculate_std(&[5.0, 5.0, 5.0], 5.0), 1.0);
/// assert_eq!(calculate_std(&[7.0], 7.0), 1.0);
/// ```
pub fn calculate_std(column: &[f64], mean: f64) -> f64 {
    if column.len() <= 1 {
        return 1.0;
    }

    let variance_sum: f64 = column
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum();

    let std_dev = (variance_sum / (column.len() - 1) as f64).sqrt();

    // Zero variance
    if std_dev == 0.0 {
        return 1.0;
    }
    std_dev
}

/// Apply `(x - mean) / std_dev` to every value.
///
/// There is no guard against `std_dev == 0.0`; source it from
/// [`calculate_std`] or every output value will be infinite or NaN.
pub fn apply_standardization(column: &[f64], mean: f64, std_dev: f64) -> Column {
    let mut scaled_column = Vec::with_capacity(column.len());
    scaled_column.extend(column.iter().map(|v| (v - mean) / std_dev));
    scaled_column
}

/// Standardize with already fitted parameters; an empty column stays empty.
pub fn scale_column(column: &[f64], mean: f64, std_dev: f64) -> Column {
    if column.is_empty() {
        return Vec::new();
    }
    apply_standardization(column, mean, std_dev)
}

/// Checked mean: rejects empty columns and non-finite values.
pub fn try_calculate_mean(column: &[f64]) -> KernelResult<f64> {
    if column.is_empty() {
        return Err(KernelError::EmptyColumn("mean"));
    }
    validate_column(column)?;
    Ok(calculate_mean(column))
}

/// Checked standard deviation.
///
/// Non-finite values or mean are errors. The small-column and zero-variance
/// fallbacks to `1.0` still apply.
pub fn try_calculate_std(column: &[f64], mean: f64) -> KernelResult<f64> {
    validate_mean(mean)?;
    validate_column(column)?;
    Ok(calculate_std(column, mean))
}

/// Checked standardization: `std_dev` must be finite and strictly positive.
pub fn try_apply_standardization(column: &[f64], mean: f64, std_dev: f64) -> KernelResult<Column> {
    validate_mean(mean)?;
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(KernelError::InvalidParameter {
            name: "std_dev",
            value: std_dev,
        });
    }
    Ok(apply_standardization(column, mean, std_dev))
}

fn validate_mean(mean: f64) -> KernelResult<()> {
    if mean.is_finite() {
        Ok(())
    } else {
        Err(KernelError::InvalidParameter {
            name: "mean",
            value: mean,
        })
    }
}

/// Fitted mean and standard deviation of a column.
///
/// The default is the neutral transform `{ mean: 0.0, std_dev: 1.0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingParameters {
    pub mean: f64,
    pub std_dev: f64,
}

impl Default for ScalingParameters {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl ScalingParameters {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Fit mean and sample standard deviation; empty columns give the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use biobeat_engine::transformations::ScalingParameters;
    ///
    /// let params = ScalingParameters::fit(&[10.0, 20.0, 30.0]);
    /// assert_eq!(params.mean, 20.0);
    /// assert_eq!(params.std_dev, 10.0);
    /// ```
    pub fn fit(column: &[f64]) -> Self {
        if column.is_empty() {
            return Self::default();
        }

        let mean = calculate_mean(column);
        let std_dev = calculate_std(column, mean);
        Self { mean, std_dev }
    }

    /// Checked fit: the column must be non-empty and finite.
    pub fn try_fit(column: &[f64]) -> KernelResult<Self> {
        let mean = try_calculate_mean(column)?;
        let std_dev = try_calculate_std(column, mean)?;
        Ok(Self { mean, std_dev })
    }

    pub fn transform(&self, column: &[f64]) -> Column {
        apply_standardization(column, self.mean, self.std_dev)
    }

    /// Map standardized values back to the original scale.
    pub fn inverse_transform(&self, column: &[f64]) -> Column {
        column.iter().map(|v| v * self.std_dev + self.mean).collect()
    }
}
