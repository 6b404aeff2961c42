//! One-vs-all logistic regression trained with batch gradient descent.
//!
//! The trainer fits one independent binary classifier per distinct label
//! (first-seen order, closed at training time) over a fixed set of three
//! features. All arithmetic is implemented manually: stable two-branch
//! sigmoid, log loss, batch gradients, simultaneous parameter updates.
//!
//! # Example
//!
//! ```
//! use clasificar::prelude::*;
//!
//! let dataset = Dataset::new(
//!     vec![0, 1, 2, 3],
//!     vec![
//!         ("x".to_string(), vec![Some(10.0), Some(11.0), Some(50.0), Some(51.0)]),
//!         ("y".to_string(), vec![Some(20.0), Some(21.0), Some(60.0), Some(61.0)]),
//!         ("z".to_string(), vec![Some(30.0), Some(31.0), Some(70.0), Some(71.0)]),
//!     ],
//!     Some(("house".to_string(), vec![
//!         Some("A".to_string()),
//!         Some("A".to_string()),
//!         Some("B".to_string()),
//!         Some("B".to_string()),
//!     ])),
//! )
//! .expect("valid dataset");
//!
//! let features = FeatureSelection::resolve(&dataset, ["x", "y", "z"])
//!     .expect("features present");
//! let config = TrainConfig::new()
//!     .with_learning_rate(0.1)
//!     .with_max_steps(5000);
//! let trainer = OneVsAllTrainer::new(config).expect("valid hyperparameters");
//! let output = trainer
//!     .fit(&dataset, &features, "house")
//!     .expect("trainable dataset");
//!
//! assert_eq!(output.model.classes(), vec!["A", "B"]);
//! ```

mod predict;

pub use predict::{Predictions, Predictor};

use crate::data::{Dataset, FeatureSelection};
use crate::error::{ClasificarError, Result};
use crate::model::{ClassModel, ModelSet};
use crate::preprocessing::StandardScaler;

/// Keeps ln() away from 0 inside the log-loss terms.
const COST_EPSILON: f64 = 1e-15;

/// Numerically stable logistic function.
///
/// Computed as 1/(1+e^-z) for z >= 0 and e^z/(1+e^z) otherwise, so the
/// exponential argument is never positive and cannot overflow for large
/// |z|.
#[must_use]
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Ordered (step, cost) pairs recorded during one binary fit.
///
/// Diagnostic only: exposed for external cost-curve rendering, never
/// persisted with the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostTrace {
    points: Vec<(usize, f64)>,
}

impl CostTrace {
    fn push(&mut self, step: usize, cost: f64) {
        self.points.push((step, cost));
    }

    /// Returns the recorded (step, cost) pairs in step order.
    #[must_use]
    pub fn points(&self) -> &[(usize, f64)] {
        &self.points
    }

    /// Returns the cost of the last recorded step, if any.
    #[must_use]
    pub fn final_cost(&self) -> Option<f64> {
        self.points.last().map(|&(_, c)| c)
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no steps were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Gradient-descent hyperparameters, supplied by the caller and threaded
/// through training as an immutable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    /// Magnitude of each gradient-descent update. Must be > 0.
    pub learning_rate: f64,
    /// Maximum number of gradient-descent steps. Must be > 0.
    pub max_steps: usize,
    /// Convergence threshold: training stops early once every parameter
    /// update is smaller than this in absolute value. Must be > 0.
    pub min_step_size: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_steps: 15_000,
            min_step_size: 0.000_05,
        }
    }
}

impl TrainConfig {
    /// Creates a config with the default hyperparameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the learning rate.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the maximum number of steps.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the convergence threshold.
    #[must_use]
    pub fn with_min_step_size(mut self, min_step_size: f64) -> Self {
        self.min_step_size = min_step_size;
        self
    }

    /// Validates every hyperparameter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` naming the first offending value.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(ClasificarError::InvalidHyperparameter {
                param: "learning_rate".to_string(),
                value: self.learning_rate.to_string(),
                constraint: "a finite value > 0".to_string(),
            });
        }
        if self.max_steps == 0 {
            return Err(ClasificarError::InvalidHyperparameter {
                param: "max_steps".to_string(),
                value: "0".to_string(),
                constraint: "> 0".to_string(),
            });
        }
        if !(self.min_step_size > 0.0 && self.min_step_size.is_finite()) {
            return Err(ClasificarError::InvalidHyperparameter {
                param: "min_step_size".to_string(),
                value: self.min_step_size.to_string(),
                constraint: "a finite value > 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Result of a multiclass training run: the persisted model plus one cost
/// trace per class, in class order.
#[derive(Debug, Clone)]
pub struct TrainingOutput {
    pub model: ModelSet,
    pub cost_traces: Vec<(String, CostTrace)>,
}

/// Trains one binary logistic-regression classifier per distinct label.
///
/// Each per-class fit is independent: no shared parameters, outcome 1 for
/// rows of the target class and 0 otherwise.
#[derive(Debug, Clone)]
pub struct OneVsAllTrainer {
    config: TrainConfig,
}

impl OneVsAllTrainer {
    /// Creates a trainer, validating the hyperparameters at entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if any config value is out of range.
    pub fn new(config: TrainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the trainer's configuration.
    #[must_use]
    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Fits the full one-vs-all model.
    ///
    /// Rows missing any of the three features or the label are dropped
    /// wholesale. The standardization parameters are fitted once on the
    /// filtered rows and stored verbatim in every class's output.
    ///
    /// # Errors
    ///
    /// - `MissingColumn` if the label column is absent,
    /// - `InsufficientGroups` if fewer than 2 distinct labels exist,
    /// - `EmptyTrainingSet` if filtering removes every row,
    /// - `Unstandardizable` if any feature is constant after filtering.
    pub fn fit(
        &self,
        dataset: &Dataset,
        features: &FeatureSelection,
        label_column: &str,
    ) -> Result<TrainingOutput> {
        let labels = dataset.label(label_column)?;

        // The class set is closed here: distinct labels in first-seen order.
        let mut classes: Vec<&str> = Vec::new();
        for label in labels.iter().flatten() {
            if !classes.contains(&label.as_str()) {
                classes.push(label.as_str());
            }
        }
        if classes.len() < 2 {
            return Err(ClasificarError::InsufficientGroups {
                found: classes.len(),
            });
        }

        // Complete rows only: all three features and the label present.
        let mut rows: Vec<[f64; 3]> = Vec::new();
        let mut row_labels: Vec<&str> = Vec::new();
        for row in 0..dataset.n_rows() {
            let (Some(x), Some(label)) = (features.row(dataset, row), &labels[row]) else {
                continue;
            };
            rows.push(x);
            row_labels.push(label.as_str());
        }
        if rows.is_empty() {
            return Err(ClasificarError::EmptyTrainingSet);
        }

        let columns: Vec<Vec<f64>> =
            (0..3).map(|k| rows.iter().map(|x| x[k]).collect()).collect();
        let scaler = StandardScaler::fit(&columns);
        for (k, params) in scaler.params().iter().enumerate() {
            if params.std == 0.0 {
                return Err(ClasificarError::Unstandardizable {
                    feature: features.names()[k].to_string(),
                });
            }
        }

        let mut standardized: Vec<[f64; 3]> = Vec::with_capacity(rows.len());
        for x in &rows {
            let mut z = [0.0; 3];
            for k in 0..3 {
                z[k] = scaler.transform(k, x[k])?;
            }
            standardized.push(z);
        }

        let means = [
            scaler.params()[0].mean,
            scaler.params()[1].mean,
            scaler.params()[2].mean,
        ];
        let stds = [
            scaler.params()[0].std,
            scaler.params()[1].std,
            scaler.params()[2].std,
        ];

        let mut model = ModelSet::new();
        let mut cost_traces = Vec::with_capacity(classes.len());
        for class in classes {
            let outcomes: Vec<f64> = row_labels
                .iter()
                .map(|&label| if label == class { 1.0 } else { 0.0 })
                .collect();
            let (theta, trace) = self.fit_class(&standardized, &outcomes);
            model.insert(
                class.to_string(),
                ClassModel {
                    theta_0: theta[0],
                    theta_1: theta[1],
                    theta_2: theta[2],
                    theta_3: theta[3],
                    means,
                    stds,
                },
            );
            cost_traces.push((class.to_string(), trace));
        }

        Ok(TrainingOutput { model, cost_traces })
    }

    /// Batch gradient descent for one binary classifier.
    ///
    /// θ starts at zero. Each step computes the sigmoid activations, the
    /// mean log loss, and the mean gradients (x₀ ≡ 1), then applies a
    /// simultaneous update from the pre-update θ. Once every |Δθ| falls
    /// under the threshold the sub-threshold update is discarded and the
    /// loop stops.
    fn fit_class(&self, xs: &[[f64; 3]], outcomes: &[f64]) -> ([f64; 4], CostTrace) {
        let mut theta = [0.0f64; 4];
        let n = xs.len() as f64;
        let mut trace = CostTrace::default();

        for step in 0..self.config.max_steps {
            let mut cost_sum = 0.0;
            let mut gradient = [0.0f64; 4];

            for (x, &y) in xs.iter().zip(outcomes) {
                let z = theta[0] + theta[1] * x[0] + theta[2] * x[1] + theta[3] * x[2];
                let activation = sigmoid(z);
                cost_sum += -y * (activation + COST_EPSILON).ln()
                    - (1.0 - y) * (1.0 - activation + COST_EPSILON).ln();

                let error = activation - y;
                gradient[0] += error;
                gradient[1] += error * x[0];
                gradient[2] += error * x[1];
                gradient[3] += error * x[2];
            }

            trace.push(step, cost_sum / n);

            let mut next = [0.0f64; 4];
            for k in 0..4 {
                next[k] = theta[k] - self.config.learning_rate * gradient[k] / n;
            }
            if (0..4).all(|k| (next[k] - theta[k]).abs() < self.config.min_step_size) {
                break;
            }
            theta = next;
        }

        (theta, trace)
    }
}
