//! End-to-end flow: explore, train, persist, reload, predict.

use clasificar::prelude::*;

/// Four rows, two classes, linearly separable.
fn training_dataset() -> Dataset {
    Dataset::new(
        vec![0, 1, 2, 3],
        vec![
            (
                "first".to_string(),
                vec![Some(10.0), Some(11.0), Some(50.0), Some(51.0)],
            ),
            (
                "second".to_string(),
                vec![Some(20.0), Some(21.0), Some(60.0), Some(61.0)],
            ),
            (
                "third".to_string(),
                vec![Some(30.0), Some(31.0), Some(70.0), Some(71.0)],
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

fn scenario_config() -> TrainConfig {
    TrainConfig::new()
        .with_learning_rate(0.1)
        .with_max_steps(5000)
        .with_min_step_size(1e-6)
}

#[test]
fn test_scenario_trains_finite_thetas_and_recovers_labels() {
    let dataset = training_dataset();
    let features = FeatureSelection::resolve(&dataset, ["first", "second", "third"])
        .expect("features present");

    let trainer = OneVsAllTrainer::new(scenario_config()).expect("valid config");
    let output = trainer
        .fit(&dataset, &features, "house")
        .expect("trainable dataset");

    assert_eq!(output.model.classes(), vec!["A", "B"]);
    for (_, m) in output.model.iter() {
        for theta in [m.theta_0, m.theta_1, m.theta_2, m.theta_3] {
            assert!(theta.is_finite());
        }
    }

    let predictor = Predictor::new(output.model).expect("validated model");
    let predictions = predictor
        .predict(&dataset, &features)
        .expect("complete rows");

    let labels: Vec<_> = predictions
        .labels()
        .iter()
        .map(|l| l.as_deref().expect("every row is complete"))
        .collect();
    assert_eq!(labels, vec!["A", "A", "B", "B"]);
}

#[test]
fn test_artifact_round_trip_reproduces_probabilities() {
    let dataset = training_dataset();
    let features = FeatureSelection::resolve(&dataset, ["first", "second", "third"])
        .expect("features present");

    let trainer = OneVsAllTrainer::new(scenario_config()).expect("valid config");
    let output = trainer
        .fit(&dataset, &features, "house")
        .expect("trainable dataset");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("weights.json");
    output.model.save(&path).expect("writable path");

    let in_memory = Predictor::new(output.model.clone()).expect("validated model");
    let reloaded = Predictor::from_file(&path).expect("valid artifact");

    assert_eq!(reloaded.model(), &output.model);

    let direct = in_memory
        .predict_proba(&dataset, &features)
        .expect("complete rows");
    let round_tripped = reloaded
        .predict_proba(&dataset, &features)
        .expect("complete rows");

    for (a, b) in direct.iter().zip(&round_tripped) {
        let (a, b) = (a.as_ref().expect("complete"), b.as_ref().expect("complete"));
        for (pa, pb) in a.iter().zip(b) {
            assert!((pa - pb).abs() < 1e-12);
        }
    }

    let direct_labels = in_memory
        .predict(&dataset, &features)
        .expect("complete rows");
    let reloaded_labels = reloaded.predict(&dataset, &features).expect("complete rows");
    assert_eq!(direct_labels, reloaded_labels);
}

#[test]
fn test_index_alignment_survives_dropped_rows() {
    // A test set with gaps in both the values and the index numbering.
    let test_set = Dataset::new(
        vec![100, 7, 42, 9],
        vec![
            (
                "first".to_string(),
                vec![Some(10.0), None, Some(50.0), Some(11.0)],
            ),
            (
                "second".to_string(),
                vec![Some(20.0), Some(1.0), Some(60.0), None],
            ),
            (
                "third".to_string(),
                vec![Some(30.0), Some(1.0), Some(70.0), Some(31.0)],
            ),
        ],
        None,
    )
    .expect("valid dataset");

    let train = training_dataset();
    let train_features = FeatureSelection::resolve(&train, ["first", "second", "third"])
        .expect("features present");
    let trainer = OneVsAllTrainer::new(scenario_config()).expect("valid config");
    let output = trainer
        .fit(&train, &train_features, "house")
        .expect("trainable dataset");

    let features = FeatureSelection::resolve(&test_set, ["first", "second", "third"])
        .expect("features present");
    let predictor = Predictor::new(output.model).expect("validated model");
    let predictions = predictor
        .predict(&test_set, &features)
        .expect("some complete rows");

    // Same index set, same order, regardless of drops.
    assert_eq!(predictions.index(), test_set.index());
    assert_eq!(predictions.labels()[0].as_deref(), Some("A"));
    assert_eq!(predictions.labels()[1], None);
    assert_eq!(predictions.labels()[2].as_deref(), Some("B"));
    assert_eq!(predictions.labels()[3], None);
}

#[test]
fn test_exploratory_statistics_on_training_table() {
    let dataset = training_dataset();

    let summaries = clasificar::stats::summarize(&dataset).expect("numeric columns");
    assert_eq!(summaries.len(), 3);
    let (name, first) = &summaries[0];
    assert_eq!(name, "first");
    assert_eq!(first.count, 4);
    assert!((first.mean - 30.5).abs() < 1e-12);

    // The three synthetic features move in lockstep: every pair correlates
    // perfectly and the first-seen pair wins.
    let (results, best) = clasificar::stats::pearson(&dataset).expect("column pairs");
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|c| (c.r - 1.0).abs() < 1e-12));
    assert_eq!(best, ("first".to_string(), "second".to_string()));

    let (variances, most_homogeneous) =
        clasificar::stats::homogeneity(&dataset, "house").expect("two groups");
    assert_eq!(variances.len(), 3);
    assert_eq!(most_homogeneous, "first");
}
