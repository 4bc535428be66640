//! Held-out evaluation

use super::model::NaiveBayesModel;
use super::types::LabeledMessage;

/// Accuracy report for a held-out test split
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub total: usize,
    pub correct: usize,
}

impl EvaluationReport {
    /// Accuracy in percent; 0 for an empty test set.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }
}

/// Classify every held-out message and compare against its recorded label.
pub fn evaluate(model: &NaiveBayesModel, test_set: &[LabeledMessage]) -> EvaluationReport {
    let correct = test_set
        .iter()
        .filter(|m| model.predict(&m.text) == m.label)
        .count();

    EvaluationReport {
        total: test_set.len(),
        correct,
    }
}
