//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use clasificar::prelude::*;
//! ```

pub use crate::classification::{
    CostTrace, OneVsAllTrainer, Predictions, Predictor, TrainConfig, TrainingOutput,
};
pub use crate::data::{Dataset, FeatureSelection};
pub use crate::error::{ClasificarError, Result};
pub use crate::model::{ClassModel, ModelSet};
pub use crate::preprocessing::{ScalerParams, StandardScaler};
pub use crate::stats::{self, CorrelationResult, DescriptiveSummary};
