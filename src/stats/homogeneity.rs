//! Inter-group homogeneity of numeric features.
//!
//! For each feature, the rows are grouped by the categorical label and the
//! variance of the per-group means is computed (unweighted global mean of
//! group means, denominator = number of groups − 1). A low variance means
//! the feature scores similarly across groups, i.e. it is homogeneous.

use crate::data::Dataset;
use crate::error::{ClasificarError, Result};
use crate::stats;

/// Computes the variance of per-group means for every numeric feature and
/// identifies the most homogeneous one (minimal variance, first-seen
/// feature wins exact ties).
///
/// Rows with a missing label belong to no group. Within a group, missing
/// feature cells are ignored when computing the group mean.
///
/// # Errors
///
/// - `MissingColumn` if `label_column` is not the dataset's label column,
/// - `EmptyInput` if the dataset has no numeric columns,
/// - `InsufficientGroups` if fewer than 2 distinct labels are present.
pub fn homogeneity(dataset: &Dataset, label_column: &str) -> Result<(Vec<(String, f64)>, String)> {
    let labels = dataset.label(label_column)?;
    if dataset.numeric_names().is_empty() {
        return Err(ClasificarError::EmptyInput);
    }

    // Group row positions by label, first-seen order.
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
    for (row, label) in labels.iter().enumerate() {
        let Some(label) = label else { continue };
        match groups.iter_mut().find(|(name, _)| name == label) {
            Some((_, rows)) => rows.push(row),
            None => groups.push((label, vec![row])),
        }
    }
    if groups.len() < 2 {
        return Err(ClasificarError::InsufficientGroups {
            found: groups.len(),
        });
    }

    let n_groups = groups.len() as f64;
    let mut variances = Vec::new();
    let mut most_homogeneous: Option<(f64, String)> = None;

    for (name, column) in dataset.numeric_columns() {
        let group_means: Vec<f64> = groups
            .iter()
            .map(|(_, rows)| {
                let values: Vec<f64> = rows.iter().filter_map(|&r| column[r]).collect();
                if values.is_empty() {
                    f64::NAN
                } else {
                    stats::mean(&values)
                }
            })
            .collect();

        let global_mean = group_means.iter().sum::<f64>() / n_groups;
        let variance = group_means
            .iter()
            .map(|&m| (m - global_mean) * (m - global_mean))
            .sum::<f64>()
            / (n_groups - 1.0);

        let improves = most_homogeneous
            .as_ref()
            .is_none_or(|(best, _)| variance < *best);
        if improves {
            most_homogeneous = Some((variance, name.to_string()));
        }
        variances.push((name.to_string(), variance));
    }

    let (_, feature) = most_homogeneous.ok_or(ClasificarError::EmptyInput)?;
    Ok((variances, feature))
}

/// Filters homogeneity results down to features whose variance of group
/// means is at most `threshold`. Plain-data helper for external reporting.
#[must_use]
pub fn low_variance(results: &[(String, f64)], threshold: f64) -> Vec<(&str, f64)> {
    results
        .iter()
        .filter(|(_, v)| *v <= threshold)
        .map(|(name, v)| (name.as_str(), *v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_dataset() -> Dataset {
        Dataset::new(
            vec![0, 1, 2, 3],
            vec![
                (
                    // Group means 1.5 and 5.5: spread apart.
                    "spread".to_string(),
                    vec![Some(1.0), Some(2.0), Some(5.0), Some(6.0)],
                ),
                (
                    // Group means 3.0 and 3.0: perfectly homogeneous.
                    "flat".to_string(),
                    vec![Some(2.0), Some(4.0), Some(3.0), Some(3.0)],
                ),
            ],
            Some((
                "house".to_string(),
                vec![
                    Some("A".to_string()),
                    Some("A".to_string()),
                    Some("B".to_string()),
                    Some("B".to_string()),
                ],
            )),
        )
        .expect("valid dataset")
    }

    #[test]
    fn test_most_homogeneous_feature() {
        let ds = labeled_dataset();
        let (variances, feature) = homogeneity(&ds, "house").expect("two groups");
        assert_eq!(feature, "flat");
        assert_eq!(variances.len(), 2);

        // Group means 1.5 and 5.5, global 3.5, variance = 2 * 4.0 / 1 = 8.0.
        let spread = variances
            .iter()
            .find(|(n, _)| n == "spread")
            .expect("present");
        assert!((spread.1 - 8.0).abs() < 1e-12);

        let flat = variances.iter().find(|(n, _)| n == "flat").expect("present");
        assert_eq!(flat.1, 0.0);
    }

    #[test]
    fn test_missing_label_column() {
        let ds = labeled_dataset();
        assert!(matches!(
            homogeneity(&ds, "city").unwrap_err(),
            ClasificarError::MissingColumn { .. }
        ));
    }

    #[test]
    fn test_single_group_is_insufficient() {
        let ds = Dataset::new(
            vec![0, 1],
            vec![("x".to_string(), vec![Some(1.0), Some(2.0)])],
            Some((
                "house".to_string(),
                vec![Some("A".to_string()), Some("A".to_string())],
            )),
        )
        .expect("valid dataset");
        assert!(matches!(
            homogeneity(&ds, "house").unwrap_err(),
            ClasificarError::InsufficientGroups { found: 1 }
        ));
    }

    #[test]
    fn test_rows_with_missing_label_join_no_group() {
        let ds = Dataset::new(
            vec![0, 1, 2],
            vec![("x".to_string(), vec![Some(1.0), Some(100.0), Some(3.0)])],
            Some((
                "house".to_string(),
                vec![Some("A".to_string()), None, Some("B".to_string())],
            )),
        )
        .expect("valid dataset");
        let (variances, _) = homogeneity(&ds, "house").expect("two groups");
        // Row 1 (value 100.0) is ignored: means 1.0 and 3.0, variance 2.0.
        assert!((variances[0].1 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_first_seen_tie_break() {
        let ds = Dataset::new(
            vec![0, 1],
            vec![
                ("p".to_string(), vec![Some(1.0), Some(1.0)]),
                ("q".to_string(), vec![Some(2.0), Some(2.0)]),
            ],
            Some((
                "house".to_string(),
                vec![Some("A".to_string()), Some("B".to_string())],
            )),
        )
        .expect("valid dataset");
        let (_, feature) = homogeneity(&ds, "house").expect("two groups");
        assert_eq!(feature, "p");
    }

    #[test]
    fn test_low_variance_filter() {
        let results = vec![
            ("a".to_string(), 0.004),
            ("b".to_string(), 120.0),
            ("c".to_string(), 49.9),
        ];
        let low = low_variance(&results, 50.0);
        assert_eq!(low, vec![("a", 0.004), ("c", 49.9)]);
    }
}
