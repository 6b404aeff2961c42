//! Manually computed descriptive statistics.
//!
//! This module reproduces the classic `describe()` summary (count, mean,
//! std, min, quartiles, max) without calling any built-in statistical
//! routine. Missing cells are ignored per column, so counts may differ
//! between columns of the same dataset.
//!
//! Conventions:
//!
//! - std is the sample standard deviation (denominator count − 1); a single
//!   valid value yields exactly 0, never NaN,
//! - percentiles use rank k = (count − 1) · p with linear interpolation
//!   between the floor and ceil ranks of the ascending-sorted valid values,
//! - a column with no valid values reports count 0 and NaN for every other
//!   statistic.
//!
//! # Examples
//!
//! ```
//! use clasificar::stats;
//!
//! let summary = stats::describe(&[Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)]);
//! assert_eq!(summary.count, 4);
//! assert_eq!(summary.p50, 2.5);
//! ```

pub mod correlation;
pub mod homogeneity;

pub use correlation::{pearson, strongly_correlated, CorrelationResult};
pub use homogeneity::{homogeneity, low_variance};

use crate::data::Dataset;
use crate::error::{ClasificarError, Result};

/// Descriptive summary of one numeric column.
///
/// `count` is the number of valid (non-missing) values; every other field is
/// NaN when `count` is 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

/// Computes the descriptive summary of a single column, ignoring missing
/// cells.
#[must_use]
pub fn describe(column: &[Option<f64>]) -> DescriptiveSummary {
    let valid = valid_values(column);
    let count = valid.len();

    if count == 0 {
        return DescriptiveSummary {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            p50: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = mean(&valid);
    let std = sample_std(&valid, mean);

    // Linear fold; no sorting needed for the extremes.
    let mut min = valid[0];
    let mut max = valid[0];
    for &v in &valid {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    let mut sorted = valid;
    sorted.sort_by(f64::total_cmp);

    DescriptiveSummary {
        count,
        mean,
        std,
        min,
        p25: interpolated_rank(&sorted, 0.25),
        p50: interpolated_rank(&sorted, 0.5),
        p75: interpolated_rank(&sorted, 0.75),
        max,
    }
}

/// Computes the descriptive summary of every numeric column, in first-seen
/// column order.
///
/// # Errors
///
/// Returns `EmptyInput` if the dataset has no numeric columns.
pub fn summarize(dataset: &Dataset) -> Result<Vec<(String, DescriptiveSummary)>> {
    let mut summaries = Vec::new();
    for (name, column) in dataset.numeric_columns() {
        summaries.push((name.to_string(), describe(column)));
    }
    if summaries.is_empty() {
        return Err(ClasificarError::EmptyInput);
    }
    Ok(summaries)
}

/// Computes the `p`-th percentile (p in [0, 1]) of the values using linear
/// interpolation over the ascending-sorted input.
///
/// Returns NaN for an empty slice.
#[must_use]
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    interpolated_rank(&sorted, p)
}

/// Rank interpolation over already-sorted, non-empty data.
fn interpolated_rank(sorted: &[f64], p: f64) -> f64 {
    let k = (sorted.len() - 1) as f64 * p;
    let f = k.floor() as usize;
    let c = f + 1;
    if c >= sorted.len() {
        return sorted[f];
    }
    sorted[f] + (sorted[c] - sorted[f]) * (k - f as f64)
}

/// Collects the valid (non-missing) values of a column.
pub(crate) fn valid_values(column: &[Option<f64>]) -> Vec<f64> {
    column.iter().flatten().copied().collect()
}

/// Arithmetic mean. The caller guarantees a non-empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (denominator n − 1). A single value yields
/// exactly 0.
pub(crate) fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|&v| (v - mean) * (v - mean)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}
