//! Classifier integration tests
//!
//! Full pipeline: corpus file -> loader -> split -> training -> evaluation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use spamfilter_rs::classifier::{evaluate, Label, LabeledMessage, NaiveBayesModel};
use spamfilter_rs::corpus::{load_corpus, shuffle_split};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_train_and_predict_end_to_end() {
    let model = NaiveBayesModel::train(&[
        LabeledMessage::new("WIN money now", Label::Spam),
        LabeledMessage::new("see you at lunch", Label::Ham),
    ]);

    assert_eq!(model.predict("win free money"), Label::Spam);
    assert_eq!(model.predict("lunch plans"), Label::Ham);
}

#[test]
fn test_full_pipeline_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        ",label,text,label_num\n\
         0,spam,\"WINNER!! You have won a free prize, claim now\",1\n\
         1,spam,URGENT! free cash prize waiting for you,1\n\
         2,spam,win money now with this free offer,1\n\
         3,ham,are we still on for the meeting tomorrow,0\n\
         4,ham,see you at lunch later today,0\n\
         5,ham,the quarterly report is attached for review,0\n"
    )
    .unwrap();

    let messages = load_corpus(file.path()).unwrap();
    assert_eq!(messages.len(), 6);

    let mut rng = StdRng::seed_from_u64(42);
    let (train_set, test_set) = shuffle_split(messages, 0.8, &mut rng);
    assert_eq!(train_set.len() + test_set.len(), 6);

    // Train on everything for deterministic assertions
    let all = load_corpus(file.path()).unwrap();
    let model = NaiveBayesModel::train(&all);
    assert!(model.is_trained());

    assert_eq!(model.predict("claim your free prize now"), Label::Spam);
    assert_eq!(model.predict("meeting about the report"), Label::Ham);

    let report = evaluate(&model, &all);
    assert_eq!(report.total, 6);
    assert_eq!(report.correct, 6);
    assert!((report.accuracy() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_prediction_is_deterministic_across_calls() {
    let model = NaiveBayesModel::train(&[
        LabeledMessage::new("cheap pills online", Label::Spam),
        LabeledMessage::new("project deadline friday", Label::Ham),
    ]);

    let first = model.predict("cheap pills");
    for _ in 0..10 {
        assert_eq!(model.predict("cheap pills"), first);
    }
}

#[test]
fn test_concurrent_prediction() {
    use std::sync::Arc;

    let model = Arc::new(NaiveBayesModel::train(&[
        LabeledMessage::new("win free cash now", Label::Spam),
        LabeledMessage::new("notes from the meeting", Label::Ham),
    ]));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let model = Arc::clone(&model);
            std::thread::spawn(move || {
                if i % 2 == 0 {
                    assert_eq!(model.predict("win free cash"), Label::Spam);
                } else {
                    assert_eq!(model.predict("meeting notes"), Label::Ham);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
