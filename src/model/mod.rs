//! Persisted model parameters and their JSON artifact.
//!
//! The artifact is a JSON object mapping each class name to its binary
//! classifier parameters, as produced by training:
//!
//! ```json
//! {
//!   "Ravenclaw": {
//!     "theta_0": 0.1, "theta_1": -2.3, "theta_2": 0.7, "theta_3": 1.9,
//!     "means": [3.1, -0.2, 44.0],
//!     "stds": [1.2, 0.9, 17.5]
//!   }
//! }
//! ```
//!
//! Class order is first-seen training order and survives serialization
//! round-trips: the predictor's argmax breaks exact probability ties by
//! class order, so the order is part of the model, not a presentation
//! detail. `ModelSet` therefore keeps an ordered list and (de)serializes
//! the map manually instead of going through a sorted map type.

use crate::error::{ClasificarError, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// Parameters of one binary one-vs-all classifier: bias + three weights,
/// plus the standardization parameters its features were trained with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    pub theta_0: f64,
    pub theta_1: f64,
    pub theta_2: f64,
    pub theta_3: f64,
    pub means: [f64; 3],
    pub stds: [f64; 3],
}

impl ClassModel {
    /// Structural validation: finite thetas and means, strictly positive
    /// finite stds.
    fn validate(&self, class: &str) -> Result<()> {
        let thetas = [self.theta_0, self.theta_1, self.theta_2, self.theta_3];
        if thetas.iter().any(|t| !t.is_finite()) {
            return Err(ClasificarError::ConfigError {
                message: format!("non-finite theta for class {class}"),
            });
        }
        if self.means.iter().any(|m| !m.is_finite()) {
            return Err(ClasificarError::ConfigError {
                message: format!("non-finite mean for class {class}"),
            });
        }
        if self.stds.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ClasificarError::ConfigError {
                message: format!("std must be strictly positive for class {class}"),
            });
        }
        Ok(())
    }
}

/// The trained multiclass model: one `ClassModel` per class, in first-seen
/// training order. This is the persisted artifact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelSet {
    entries: Vec<(String, ClassModel)>,
}

impl ModelSet {
    /// Creates an empty model set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class. Training inserts each class exactly once, in
    /// first-seen label order.
    pub fn insert(&mut self, class: String, model: ClassModel) {
        self.entries.push((class, model));
    }

    /// Returns the parameters for `class`, if present.
    #[must_use]
    pub fn get(&self, class: &str) -> Option<&ClassModel> {
        self.entries
            .iter()
            .find(|(c, _)| c == class)
            .map(|(_, m)| m)
    }

    /// Iterates classes and parameters in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassModel)> {
        self.entries.iter().map(|(c, m)| (c.as_str(), m))
    }

    /// Returns the class names in stored order.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.entries.iter().map(|(c, _)| c.as_str()).collect()
    }

    /// Returns the number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set holds no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates every class's parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the set is empty, a class name repeats, or
    /// any class fails the per-class checks (finite thetas and means,
    /// strictly positive stds).
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(ClasificarError::ConfigError {
                message: "model contains no classes".to_string(),
            });
        }
        for (i, (class, model)) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|(c, _)| c == class) {
                return Err(ClasificarError::ConfigError {
                    message: format!("duplicate class {class}"),
                });
            }
            model.validate(class)?;
        }
        Ok(())
    }

    /// Writes the artifact as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Io` on write failure and `Serialization` on encoding
    /// failure.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reads and validates an artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Io` on read failure, `Serialization` on malformed JSON, and
    /// `ConfigError` if the decoded parameters fail validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let set: Self = serde_json::from_str(&json)?;
        set.validate()?;
        Ok(set)
    }
}

impl Serialize for ModelSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (class, model) in &self.entries {
            map.serialize_entry(class, model)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ModelSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ModelSetVisitor;

        impl<'de> Visitor<'de> for ModelSetVisitor {
            type Value = ModelSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from class name to model parameters")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut set = ModelSet::new();
                while let Some((class, model)) = access.next_entry::<String, ClassModel>()? {
                    set.insert(class, model);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ModelSetVisitor)
    }
}

#[cfg(test)]
mod tests;
