//! Tests for the model artifact.

use super::*;

fn class_model(bias: f64) -> ClassModel {
    ClassModel {
        theta_0: bias,
        theta_1: 0.5,
        theta_2: -1.25,
        theta_3: 2.0,
        means: [1.0, 2.0, 3.0],
        stds: [0.5, 1.5, 2.5],
    }
}

fn two_class_set() -> ModelSet {
    let mut set = ModelSet::new();
    set.insert("B".to_string(), class_model(0.1));
    set.insert("A".to_string(), class_model(-0.2));
    set
}

#[test]
fn test_validate_accepts_well_formed_set() {
    assert!(two_class_set().validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_set() {
    assert!(matches!(
        ModelSet::new().validate().unwrap_err(),
        ClasificarError::ConfigError { .. }
    ));
}

#[test]
fn test_validate_rejects_nonpositive_std() {
    let mut set = ModelSet::new();
    let mut model = class_model(0.0);
    model.stds[1] = 0.0;
    set.insert("A".to_string(), model);
    assert!(set.validate().is_err());
}

#[test]
fn test_validate_rejects_non_finite_theta() {
    let mut set = ModelSet::new();
    let mut model = class_model(0.0);
    model.theta_2 = f64::NAN;
    set.insert("A".to_string(), model);
    assert!(set.validate().is_err());
}

#[test]
fn test_validate_rejects_duplicate_class() {
    let mut set = ModelSet::new();
    set.insert("A".to_string(), class_model(0.0));
    set.insert("A".to_string(), class_model(1.0));
    assert!(set.validate().is_err());
}

#[test]
fn test_json_shape_matches_artifact_format() {
    let set = two_class_set();
    let json = serde_json::to_string(&set).expect("serializable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    let b = &value["B"];
    assert_eq!(b["theta_0"], 0.1);
    assert_eq!(b["means"].as_array().map(Vec::len), Some(3));
    assert_eq!(b["stds"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_round_trip_preserves_class_order() {
    let set = two_class_set();
    let json = serde_json::to_string(&set).expect("serializable");
    let loaded: ModelSet = serde_json::from_str(&json).expect("decodable");

    assert_eq!(loaded, set);
    // "B" was inserted first and must still iterate first.
    assert_eq!(loaded.classes(), vec!["B", "A"]);
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("weights.json");

    let set = two_class_set();
    set.save(&path).expect("writable path");
    let loaded = ModelSet::load(&path).expect("valid artifact");
    assert_eq!(loaded, set);
}

#[test]
fn test_load_rejects_invalid_parameters() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("weights.json");

    // Structurally valid JSON with an out-of-range std.
    let json = r#"{
        "A": {
            "theta_0": 0.0, "theta_1": 0.0, "theta_2": 0.0, "theta_3": 0.0,
            "means": [0.0, 0.0, 0.0],
            "stds": [1.0, -2.0, 1.0]
        }
    }"#;
    std::fs::write(&path, json).expect("writable path");

    assert!(matches!(
        ModelSet::load(&path).unwrap_err(),
        ClasificarError::ConfigError { .. }
    ));
}

#[test]
fn test_load_rejects_missing_fields() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("weights.json");
    std::fs::write(&path, r#"{"A": {"theta_0": 1.0}}"#).expect("writable path");

    assert!(matches!(
        ModelSet::load(&path).unwrap_err(),
        ClasificarError::Serialization(_)
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    assert!(matches!(
        ModelSet::load("/nonexistent/weights.json").unwrap_err(),
        ClasificarError::Io(_)
    ));
}

#[test]
fn test_get_by_class() {
    let set = two_class_set();
    assert_eq!(set.get("A").map(|m| m.theta_0), Some(-0.2));
    assert!(set.get("C").is_none());
}
