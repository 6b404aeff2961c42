//! Inference from persisted one-vs-all parameters.
//!
//! The predictor standardizes each complete row with every class's stored
//! fit-time parameters, computes the stable sigmoid probability per class,
//! and decides by strict argmax. Rows missing any feature are not predicted
//! but stay in the result as `None`: the output index always equals the
//! input index, in order.

use crate::data::{Dataset, FeatureSelection};
use crate::error::{ClasificarError, Result};
use crate::model::{ClassModel, ModelSet};
use crate::preprocessing::ScalerParams;

use super::sigmoid;

/// Index-aligned prediction result: one predicted class (or `None` for
/// rows that were dropped for missing features) per input row.
#[derive(Debug, Clone, PartialEq)]
pub struct Predictions {
    index: Vec<i64>,
    labels: Vec<Option<String>>,
}

impl Predictions {
    /// Returns the original row index, in input order.
    #[must_use]
    pub fn index(&self) -> &[i64] {
        &self.index
    }

    /// Returns the predicted class per row, aligned with [`Self::index`].
    #[must_use]
    pub fn labels(&self) -> &[Option<String>] {
        &self.labels
    }

    /// Iterates (original index, predicted class) pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, Option<&str>)> {
        self.index
            .iter()
            .zip(&self.labels)
            .map(|(&i, label)| (i, label.as_deref()))
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Applies a validated `ModelSet` to new rows.
#[derive(Debug, Clone)]
pub struct Predictor {
    model: ModelSet,
}

impl Predictor {
    /// Creates a predictor, validating the model structurally first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any class is missing a parameter, carries a
    /// non-finite value, or has a non-positive standard deviation.
    pub fn new(model: ModelSet) -> Result<Self> {
        model.validate()?;
        Ok(Self { model })
    }

    /// Loads and validates a persisted artifact, then builds a predictor.
    ///
    /// # Errors
    ///
    /// Propagates `Io`, `Serialization`, and `ConfigError` from
    /// [`ModelSet::load`].
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Ok(Self {
            model: ModelSet::load(path)?,
        })
    }

    /// Returns the underlying model.
    #[must_use]
    pub fn model(&self) -> &ModelSet {
        &self.model
    }

    /// Predicts a class for every complete row of the dataset.
    ///
    /// The decision is the argmax of the per-class probabilities; exact
    /// ties go to the class stored first. Rows missing any feature yield
    /// `None` but keep their place in the result.
    ///
    /// # Errors
    ///
    /// - `InvalidProbability` if any class probability is NaN or infinite
    ///   (the whole prediction aborts, not just that row),
    /// - `EmptyInput` if every row is missing at least one feature.
    pub fn predict(&self, dataset: &Dataset, features: &FeatureSelection) -> Result<Predictions> {
        let index = dataset.index().to_vec();
        let mut labels = vec![None; dataset.n_rows()];
        let mut any_complete = false;

        for row in 0..dataset.n_rows() {
            let Some(x) = features.row(dataset, row) else {
                continue;
            };
            any_complete = true;

            let mut best: Option<(f64, &str)> = None;
            for (class, class_model) in self.model.iter() {
                let probability = class_probability(class_model, x)?;
                if !probability.is_finite() {
                    return Err(ClasificarError::InvalidProbability {
                        class: class.to_string(),
                        row: index[row],
                    });
                }
                // Strict comparison: the first-seen class keeps exact ties.
                if best.is_none_or(|(p, _)| probability > p) {
                    best = Some((probability, class));
                }
            }
            labels[row] = best.map(|(_, class)| class.to_string());
        }

        if !any_complete {
            return Err(ClasificarError::EmptyInput);
        }
        Ok(Predictions { index, labels })
    }

    /// Computes the per-class probabilities for every row, aligned with the
    /// dataset index. Incomplete rows yield `None`; the inner vector follows
    /// the model's class order.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::predict`].
    pub fn predict_proba(
        &self,
        dataset: &Dataset,
        features: &FeatureSelection,
    ) -> Result<Vec<Option<Vec<f64>>>> {
        let index = dataset.index();
        let mut probabilities = vec![None; dataset.n_rows()];
        let mut any_complete = false;

        for row in 0..dataset.n_rows() {
            let Some(x) = features.row(dataset, row) else {
                continue;
            };
            any_complete = true;

            let mut row_probs = Vec::with_capacity(self.model.len());
            for (class, class_model) in self.model.iter() {
                let probability = class_probability(class_model, x)?;
                if !probability.is_finite() {
                    return Err(ClasificarError::InvalidProbability {
                        class: class.to_string(),
                        row: index[row],
                    });
                }
                row_probs.push(probability);
            }
            probabilities[row] = Some(row_probs);
        }

        if !any_complete {
            return Err(ClasificarError::EmptyInput);
        }
        Ok(probabilities)
    }
}

/// Standardizes one row with the class's stored parameters and applies the
/// stable sigmoid to the linear score.
fn class_probability(model: &ClassModel, x: [f64; 3]) -> Result<f64> {
    let weights = [model.theta_1, model.theta_2, model.theta_3];
    let mut z = model.theta_0;
    for k in 0..3 {
        let params = ScalerParams {
            mean: model.means[k],
            std: model.stds[k],
        };
        z += weights[k] * params.transform(x[k])?;
    }
    Ok(sigmoid(z))
}
