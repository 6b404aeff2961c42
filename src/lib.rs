//! Clasificar: manual descriptive statistics and one-vs-all logistic
//! regression for labeled numeric datasets.
//!
//! Every statistic and every training step is computed with hand-written
//! arithmetic; the crate never calls a statistical or ML library routine.
//! It targets analysts who need exploratory statistics (describe-style
//! summaries, Pearson correlation, inter-group homogeneity) and a
//! reproducible three-feature classifier over the same table.
//!
//! Loading CSVs, parsing command lines, and rendering charts are external
//! concerns: the crate consumes an in-memory [`data::Dataset`] and exposes
//! plain data (summaries, correlations, cost traces, index-aligned
//! predictions) for outside renderers.
//!
//! # Quick Start
//!
//! ```
//! use clasificar::prelude::*;
//!
//! let dataset = Dataset::new(
//!     vec![0, 1, 2, 3],
//!     vec![
//!         ("a".to_string(), vec![Some(10.0), Some(11.0), Some(50.0), Some(51.0)]),
//!         ("b".to_string(), vec![Some(20.0), Some(21.0), Some(60.0), Some(61.0)]),
//!         ("c".to_string(), vec![Some(30.0), Some(31.0), Some(70.0), Some(71.0)]),
//!     ],
//!     Some(("house".to_string(), vec![
//!         Some("A".to_string()),
//!         Some("A".to_string()),
//!         Some("B".to_string()),
//!         Some("B".to_string()),
//!     ])),
//! )
//! .expect("columns share the index length");
//!
//! // Exploratory statistics.
//! let summaries = stats::summarize(&dataset).expect("numeric columns present");
//! assert_eq!(summaries[0].1.count, 4);
//!
//! // Train a one-vs-all classifier on the three features.
//! let features = FeatureSelection::resolve(&dataset, ["a", "b", "c"])
//!     .expect("features present");
//! let trainer = OneVsAllTrainer::new(
//!     TrainConfig::new().with_learning_rate(0.1).with_max_steps(5000),
//! )
//! .expect("valid hyperparameters");
//! let output = trainer
//!     .fit(&dataset, &features, "house")
//!     .expect("trainable dataset");
//!
//! // Predict back the training rows.
//! let predictor = Predictor::new(output.model).expect("validated model");
//! let predictions = predictor.predict(&dataset, &features).expect("complete rows");
//! assert_eq!(predictions.labels()[0].as_deref(), Some("A"));
//! assert_eq!(predictions.labels()[3].as_deref(), Some("B"));
//! ```
//!
//! # Modules
//!
//! - [`data`]: dataset container with explicit missing markers and the
//!   fixed three-feature schema
//! - [`stats`]: descriptive summaries, Pearson correlation, inter-group
//!   homogeneity
//! - [`preprocessing`]: z-score standardization with frozen parameters
//! - [`classification`]: gradient-descent trainer and predictor
//! - [`model`]: persisted model parameters and their JSON artifact
//! - [`error`]: crate-wide error type

pub mod classification;
pub mod data;
pub mod error;
pub mod model;
pub mod prelude;
pub mod preprocessing;
pub mod stats;
