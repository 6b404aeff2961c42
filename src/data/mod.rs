//! Dataset container for named columns with explicit missing markers.
//!
//! Provides a minimal ordered table for the statistics and classification
//! engines. Heavy data wrangling (CSV parsing, type sniffing) belongs to an
//! external loader; this type only holds what the engines consume:
//!
//! - numeric columns as `Vec<Option<f64>>` (a missing cell is `None`, never a
//!   NaN sentinel, so arithmetic cannot silently propagate it),
//! - at most one categorical label column,
//! - an order-preserving row index carried from the source's leading column.
//!
//! # Examples
//!
//! ```
//! use clasificar::data::Dataset;
//!
//! let ds = Dataset::new(
//!     vec![0, 1, 2],
//!     vec![("score".to_string(), vec![Some(1.0), None, Some(3.0)])],
//!     None,
//! )
//! .expect("columns share the index length");
//! assert_eq!(ds.n_rows(), 3);
//! ```

use crate::error::{ClasificarError, Result};

/// An ordered table of named numeric columns, an optional categorical label
/// column, and an original row index.
///
/// The table is read-only once constructed; every derived view (filtered
/// rows, standardized columns) is a new value.
#[derive(Debug, Clone)]
pub struct Dataset {
    index: Vec<i64>,
    numeric: Vec<(String, Vec<Option<f64>>)>,
    label: Option<(String, Vec<Option<String>>)>,
}

impl Dataset {
    /// Creates a new `Dataset` from an index, named numeric columns, and an
    /// optional label column.
    ///
    /// # Errors
    ///
    /// Returns an error if any column length differs from the index length,
    /// if there are no columns at all, or if column names are empty or
    /// duplicated.
    pub fn new(
        index: Vec<i64>,
        numeric: Vec<(String, Vec<Option<f64>>)>,
        label: Option<(String, Vec<Option<String>>)>,
    ) -> Result<Self> {
        if numeric.is_empty() && label.is_none() {
            return Err("Dataset must have at least one column".into());
        }

        let n_rows = index.len();
        for (name, col) in &numeric {
            if col.len() != n_rows {
                return Err("All columns must have the same length as the index".into());
            }
            if name.is_empty() {
                return Err("Column names cannot be empty".into());
            }
        }
        if let Some((name, col)) = &label {
            if col.len() != n_rows {
                return Err("All columns must have the same length as the index".into());
            }
            if name.is_empty() {
                return Err("Column names cannot be empty".into());
            }
        }

        let mut names: Vec<&str> = numeric.iter().map(|(n, _)| n.as_str()).collect();
        if let Some((name, _)) = &label {
            names.push(name.as_str());
        }
        names.sort_unstable();
        for i in 1..names.len() {
            if names[i] == names[i - 1] {
                return Err("Duplicate column names not allowed".into());
            }
        }

        Ok(Self {
            index,
            numeric,
            label,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    /// Returns the original row index, in source order.
    #[must_use]
    pub fn index(&self) -> &[i64] {
        &self.index
    }

    /// Returns the numeric column names in first-seen order.
    #[must_use]
    pub fn numeric_names(&self) -> Vec<&str> {
        self.numeric.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns the numeric columns as `(name, cells)` pairs in first-seen
    /// order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.numeric
            .iter()
            .map(|(n, col)| (n.as_str(), col.as_slice()))
    }

    /// Returns a numeric column by name.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` if no numeric column has this name.
    pub fn column(&self, name: &str) -> Result<&[Option<f64>]> {
        self.numeric
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, col)| col.as_slice())
            .ok_or_else(|| ClasificarError::MissingColumn {
                name: name.to_string(),
            })
    }

    /// Returns the label column, checking that its name matches.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` if the dataset carries no label column or the
    /// stored label column has a different name.
    pub fn label(&self, name: &str) -> Result<&[Option<String>]> {
        self.label
            .as_ref()
            .filter(|(n, _)| n == name)
            .map(|(_, col)| col.as_slice())
            .ok_or_else(|| ClasificarError::MissingColumn {
                name: name.to_string(),
            })
    }
}

/// The fixed three-feature schema, resolved once against a dataset into
/// positional column slots.
///
/// Resolution replaces name-keyed lookups in the hot paths: the trainer and
/// predictor index columns by slot. A selection is only meaningful for the
/// dataset it was resolved against.
#[derive(Debug, Clone)]
pub struct FeatureSelection {
    names: [String; 3],
    slots: [usize; 3],
}

impl FeatureSelection {
    /// Resolves three feature names against the dataset's numeric columns.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` naming the first feature that is absent.
    pub fn resolve(dataset: &Dataset, names: [&str; 3]) -> Result<Self> {
        let mut slots = [0usize; 3];
        for (k, name) in names.iter().enumerate() {
            slots[k] = dataset
                .numeric
                .iter()
                .position(|(n, _)| n == name)
                .ok_or_else(|| ClasificarError::MissingColumn {
                    name: (*name).to_string(),
                })?;
        }
        Ok(Self {
            names: names.map(ToString::to_string),
            slots,
        })
    }

    /// Returns the three feature names.
    #[must_use]
    pub fn names(&self) -> [&str; 3] {
        [&self.names[0], &self.names[1], &self.names[2]]
    }

    /// Returns the three feature columns of `dataset` by slot.
    #[must_use]
    pub(crate) fn columns<'a>(&self, dataset: &'a Dataset) -> [&'a [Option<f64>]; 3] {
        self.slots.map(|s| dataset.numeric[s].1.as_slice())
    }

    /// Returns the three feature cells of one row, or `None` if any cell is
    /// missing. Rows missing any one feature are dropped wholesale.
    #[must_use]
    pub(crate) fn row(&self, dataset: &Dataset, row: usize) -> Option<[f64; 3]> {
        let cols = self.columns(dataset);
        Some([cols[0][row]?, cols[1][row]?, cols[2][row]?])
    }
}
