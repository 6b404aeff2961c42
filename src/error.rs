//! Error types for clasificar operations.
//!
//! Every failure in the numeric engine is unrecoverable for the computation
//! in progress: it aborts that operation and surfaces a descriptive error.

use std::fmt;

/// Main error type for clasificar operations.
///
/// # Examples
///
/// ```
/// use clasificar::error::ClasificarError;
///
/// let err = ClasificarError::MissingColumn {
///     name: "score".to_string(),
/// };
/// assert!(err.to_string().contains("score"));
/// ```
#[derive(Debug)]
pub enum ClasificarError {
    /// Dataset has no numeric columns (or no column pair) to operate on.
    EmptyInput,

    /// A required column is absent from the dataset.
    MissingColumn {
        /// Name of the missing column
        name: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A feature has zero standard deviation after filtering, so z-score
    /// standardization is undefined for it.
    Unstandardizable {
        /// Name of the offending feature
        feature: String,
    },

    /// Fewer than two distinct groups found where a grouping is required.
    InsufficientGroups {
        /// Number of groups actually found
        found: usize,
    },

    /// Model parameters failed structural validation.
    ConfigError {
        /// Validation failure message
        message: String,
    },

    /// A computed class probability was NaN or infinite.
    InvalidProbability {
        /// Class whose probability was invalid
        class: String,
        /// Original row index where it occurred
        row: i64,
    },

    /// Division by a zero standard deviation.
    DivideByZero,

    /// Row filtering removed every row of the training set.
    EmptyTrainingSet,

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for ClasificarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClasificarError::EmptyInput => {
                write!(f, "No numeric columns to operate on")
            }
            ClasificarError::MissingColumn { name } => {
                write!(f, "Column not found: {name}")
            }
            ClasificarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            ClasificarError::Unstandardizable { feature } => {
                write!(
                    f,
                    "Feature {feature} has zero standard deviation, cannot standardize"
                )
            }
            ClasificarError::InsufficientGroups { found } => {
                write!(f, "Need at least 2 distinct groups, found {found}")
            }
            ClasificarError::ConfigError { message } => {
                write!(f, "Invalid model parameters: {message}")
            }
            ClasificarError::InvalidProbability { class, row } => {
                write!(
                    f,
                    "Invalid probability for class {class} at row {row}, check weights and inputs"
                )
            }
            ClasificarError::DivideByZero => {
                write!(f, "Division by zero standard deviation")
            }
            ClasificarError::EmptyTrainingSet => {
                write!(f, "Filtering removed every row of the training set")
            }
            ClasificarError::Io(e) => write!(f, "I/O error: {e}"),
            ClasificarError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            ClasificarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ClasificarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClasificarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClasificarError {
    fn from(err: std::io::Error) -> Self {
        ClasificarError::Io(err)
    }
}

impl From<serde_json::Error> for ClasificarError {
    fn from(err: serde_json::Error) -> Self {
        ClasificarError::Serialization(err.to_string())
    }
}

impl From<&str> for ClasificarError {
    fn from(msg: &str) -> Self {
        ClasificarError::Other(msg.to_string())
    }
}

impl From<String> for ClasificarError {
    fn from(msg: String) -> Self {
        ClasificarError::Other(msg)
    }
}

/// Result type alias for clasificar operations.
pub type Result<T> = std::result::Result<T, ClasificarError>;
