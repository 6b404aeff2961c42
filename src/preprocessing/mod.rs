//! Z-score standardization with frozen fit-time parameters.
//!
//! The scaler computes each feature's mean and sample standard deviation
//! once, at fit time; transformation always uses those stored parameters
//! and is never refit at inference. A zero standard deviation makes the
//! transform undefined and fails hard rather than returning an infinity.
//!
//! # Examples
//!
//! ```
//! use clasificar::preprocessing::ScalerParams;
//!
//! let params = ScalerParams::fit(&[2.0, 4.0, 6.0]);
//! assert_eq!(params.mean, 4.0);
//! let z = params.transform(4.0).expect("nonzero std");
//! assert_eq!(z, 0.0);
//! ```

use crate::error::{ClasificarError, Result};
use crate::stats;
use serde::{Deserialize, Serialize};

/// Per-feature standardization parameters, frozen at fit time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: f64,
    pub std: f64,
}

impl ScalerParams {
    /// Fits mean and sample standard deviation over the values.
    ///
    /// An empty slice yields NaN parameters; callers that filter rows are
    /// expected to reject an empty working set before fitting.
    #[must_use]
    pub fn fit(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: f64::NAN,
                std: f64::NAN,
            };
        }
        let mean = stats::mean(values);
        let std = stats::sample_std(values, mean);
        Self { mean, std }
    }

    /// Applies the z-score transform (value − mean) / std.
    ///
    /// # Errors
    ///
    /// Returns `DivideByZero` if the stored std is 0.
    pub fn transform(&self, value: f64) -> Result<f64> {
        if self.std == 0.0 {
            return Err(ClasificarError::DivideByZero);
        }
        Ok((value - self.mean) / self.std)
    }
}

/// Standardizes a fixed set of feature columns with one `ScalerParams` per
/// column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    params: Vec<ScalerParams>,
}

impl StandardScaler {
    /// Fits one `ScalerParams` per column.
    #[must_use]
    pub fn fit(columns: &[Vec<f64>]) -> Self {
        Self {
            params: columns.iter().map(|c| ScalerParams::fit(c)).collect(),
        }
    }

    /// Returns the fitted per-column parameters.
    #[must_use]
    pub fn params(&self) -> &[ScalerParams] {
        &self.params
    }

    /// Transforms one value of column `feature`.
    ///
    /// # Errors
    ///
    /// Returns `DivideByZero` if that column's std is 0.
    ///
    /// # Panics
    ///
    /// Panics if `feature` is out of range for the fitted columns.
    pub fn transform(&self, feature: usize, value: f64) -> Result<f64> {
        self.params[feature].transform(value)
    }
}
