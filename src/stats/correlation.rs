//! Pairwise Pearson correlation over numeric columns.
//!
//! Each unordered column pair is evaluated on its pairwise-complete rows
//! (rows missing either value are dropped for that pair only). The best
//! pair is the one with correlation closest to ±1, scanned in deterministic
//! first-seen pair order.

use crate::data::Dataset;
use crate::error::{ClasificarError, Result};
use crate::stats;

/// Pearson correlation of one unordered feature pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationResult {
    pub feature_a: String,
    pub feature_b: String,
    /// Correlation coefficient in [-1, 1]; defined as 0 when either column
    /// has no variance on the pairwise-complete rows.
    pub r: f64,
}

/// Computes Pearson correlation for every unordered pair of numeric columns
/// and identifies the most strongly correlated pair.
///
/// Pairs are emitted in first-seen column order with i < j: no self-pairs,
/// no duplicates. The best pair minimizes (1 − r) for r ≥ 0 and (1 + r) for
/// r < 0; the first pair scanned wins exact ties.
///
/// # Errors
///
/// Returns `EmptyInput` if the dataset has fewer than two numeric columns,
/// so no pair exists.
pub fn pearson(dataset: &Dataset) -> Result<(Vec<CorrelationResult>, (String, String))> {
    let columns: Vec<(&str, &[Option<f64>])> = dataset.numeric_columns().collect();
    if columns.len() < 2 {
        return Err(ClasificarError::EmptyInput);
    }

    let mut results = Vec::new();
    let mut best: Option<(f64, (String, String))> = None;

    for i in 0..columns.len() {
        for j in (i + 1)..columns.len() {
            let (name_a, col_a) = columns[i];
            let (name_b, col_b) = columns[j];

            let (xs, ys) = pairwise_complete(col_a, col_b);
            let r = pearson_r(&xs, &ys);

            let distance = if r >= 0.0 { 1.0 - r } else { 1.0 + r };
            let improves = best.as_ref().is_none_or(|(d, _)| distance < *d);
            if improves {
                best = Some((distance, (name_a.to_string(), name_b.to_string())));
            }

            results.push(CorrelationResult {
                feature_a: name_a.to_string(),
                feature_b: name_b.to_string(),
                r,
            });
        }
    }

    let (_, best_pair) = best.ok_or(ClasificarError::EmptyInput)?;
    Ok((results, best_pair))
}

/// Filters correlation results down to strongly correlated pairs,
/// |r| >= `threshold`. Plain-data helper for external reporting.
#[must_use]
pub fn strongly_correlated(
    results: &[CorrelationResult],
    threshold: f64,
) -> Vec<&CorrelationResult> {
    results.iter().filter(|c| c.r.abs() >= threshold).collect()
}

/// Retains the rows where both columns hold a value.
fn pairwise_complete(a: &[Option<f64>], b: &[Option<f64>]) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (va, vb) in a.iter().zip(b) {
        if let (Some(x), Some(y)) = (va, vb) {
            xs.push(*x);
            ys.push(*y);
        }
    }
    (xs, ys)
}

/// r = Σ(dx·dy) / √(Σdx² · Σdy²), with r := 0 when the denominator is 0
/// (constant column or no complete rows).
fn pearson_r(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let mean_x = stats::mean(xs);
    let mean_y = stats::mean(ys);

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denominator = (sum_xx * sum_yy).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        sum_xy / denominator
    }
}
