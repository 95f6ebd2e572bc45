//! Column cleaning: invalid value removal and selection-based median.

use crate::error::{KernelError, KernelResult};
use crate::transformations::Column;

/// Remove infinite and NaN values from a column.
///
/// Returns a new column holding every finite value in its original order.
/// The input is never modified.
///
/// # Examples
///
/// ```
/// use biobeat_engine::transformations::remove_invalids;
///
/// let clean = remove_invalids(&[1.0, f64::NAN, 2.0, f64::INFINITY, 3.0]);
/// assert_eq!(clean, vec![1.0, 2.0, 3.0]);
/// ```
pub fn remove_invalids(column: &[f64]) -> Column {
    let mut clean_column = Vec::with_capacity(column.len());
    clean_column.extend(column.iter().copied().filter(|v| v.is_finite()));
    clean_column
}

/// Compute the median of a column, reordering the owned buffer in place.
///
/// Uses quickselect (`select_nth_unstable_by`) around `n / 2`, so the cost is
/// linear on average. For even lengths the lower middle value is the maximum of
/// the left partition, which is not sorted after selection.
///
/// Returns `0.0` for an empty column. Non-finite values are not filtered; run
/// [`remove_invalids`] first.
///
/// # Examples
///
/// ```
/// use biobeat_engine::transformations::calculate_median;
///
/// assert_eq!(calculate_median(vec![4.0, 1.0, 3.0, 2.0]), 2.5);
/// assert_eq!(calculate_median(Vec::new()), 0.0);
/// ```
pub fn calculate_median(mut column: Column) -> f64 {
    if column.is_empty() {
        return 0.0;
    }

    let n = column.len();
    let mid = n / 2;
    let (lower_half, upper, _) = column.select_nth_unstable_by(mid, f64::total_cmp);
    let upper = *upper;

    if n % 2 == 1 {
        return upper;
    }

    let lower = lower_half
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    (lower + upper) / 2.0
}

/// Median of a borrowed column. Selection runs on a private copy.
pub fn median_of(column: &[f64]) -> f64 {
    calculate_median(column.to_vec())
}

/// Median of the finite values of a column.
///
/// Returns `0.0` when the column is empty or holds no finite value.
pub fn clean_median(column: &[f64]) -> f64 {
    if column.is_empty() {
        return 0.0;
    }
    calculate_median(remove_invalids(column))
}

/// Check that a column holds only finite values.
///
/// Reports the first offending element.
pub fn validate_column(column: &[f64]) -> KernelResult<()> {
    match column.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(KernelError::NonFinite {
            index,
            value: column[index],
        }),
        None => Ok(()),
    }
}

/// Checked median: rejects empty columns and non-finite values.
pub fn try_calculate_median(column: Column) -> KernelResult<f64> {
    if column.is_empty() {
        return Err(KernelError::EmptyColumn("median"));
    }
    validate_column(&column)?;
    Ok(calculate_median(column))
}
