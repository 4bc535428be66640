//! Naive Bayes spam model
//!
//! Per-class word frequency tables with class priors, scored in natural-log
//! space with Laplace add-one smoothing. Training builds the whole model in
//! one pass and returns an immutable value, so prediction needs no locking.

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

use crate::error::{Result, SpamFilterError};

use super::tokenizer::tokenize;
use super::types::{Label, LabeledMessage, TrainingSummary};

/// A trained Naive Bayes classifier.
///
/// Constructed by [`NaiveBayesModel::train`] and never mutated afterwards;
/// share it behind an `Arc` for concurrent prediction. Re-training means
/// building a new model.
pub struct NaiveBayesModel {
    spam_word_counts: HashMap<String, u64>,
    ham_word_counts: HashMap<String, u64>,
    spam_message_count: u64,
    ham_message_count: u64,
    vocabulary: HashSet<String>,
    p_spam: f64,
    p_ham: f64,
    // Sums over the per-class tables, cached at training time
    total_spam_words: u64,
    total_ham_words: u64,
    trained_at: DateTime<Utc>,
}

impl NaiveBayesModel {
    /// Train a model on a labeled corpus.
    ///
    /// A single linear pass: per message the class count is bumped and every
    /// token lands in the shared vocabulary and the class frequency table.
    /// Priors are the class frequencies, or 0.5 each for an empty corpus.
    pub fn train(messages: &[LabeledMessage]) -> Self {
        let mut spam_word_counts: HashMap<String, u64> = HashMap::new();
        let mut ham_word_counts: HashMap<String, u64> = HashMap::new();
        let mut vocabulary: HashSet<String> = HashSet::new();
        let mut spam_message_count = 0u64;
        let mut ham_message_count = 0u64;

        for message in messages {
            let counts = match message.label {
                Label::Spam => {
                    spam_message_count += 1;
                    &mut spam_word_counts
                }
                Label::Ham => {
                    ham_message_count += 1;
                    &mut ham_word_counts
                }
            };

            for word in tokenize(&message.text) {
                vocabulary.insert(word.clone());
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        let total = spam_message_count + ham_message_count;
        let (p_spam, p_ham) = if total > 0 {
            (
                spam_message_count as f64 / total as f64,
                ham_message_count as f64 / total as f64,
            )
        } else {
            (0.5, 0.5)
        };

        let total_spam_words = spam_word_counts.values().sum();
        let total_ham_words = ham_word_counts.values().sum();

        Self {
            spam_word_counts,
            ham_word_counts,
            spam_message_count,
            ham_message_count,
            vocabulary,
            p_spam,
            p_ham,
            total_spam_words,
            total_ham_words,
            trained_at: Utc::now(),
        }
    }

    /// Classify a message.
    ///
    /// Never fails: a model that saw only one class answers with that class
    /// (the zero prior would otherwise send the other score to negative
    /// infinity), and a model that saw nothing answers ham. Otherwise both
    /// classes are scored in log space and spam must win strictly; a tie is
    /// ham.
    pub fn predict(&self, text: &str) -> Label {
        let words = tokenize(text);

        if self.p_spam == 0.0 && self.p_ham == 0.0 {
            return Label::Ham;
        }
        if self.p_spam == 0.0 {
            return Label::Ham;
        }
        if self.p_ham == 0.0 {
            return Label::Spam;
        }

        let mut spam_score = self.p_spam.ln();
        let mut ham_score = self.p_ham.ln();
        let vocabulary_size = self.vocabulary.len() as f64;

        for word in &words {
            // Laplace add-one smoothing with the shared vocabulary as the
            // denominator term; unseen tokens never hit a zero probability
            let spam_count = self.spam_word_counts.get(word).copied().unwrap_or(0) as f64;
            spam_score +=
                ((spam_count + 1.0) / (self.total_spam_words as f64 + vocabulary_size)).ln();

            let ham_count = self.ham_word_counts.get(word).copied().unwrap_or(0) as f64;
            ham_score +=
                ((ham_count + 1.0) / (self.total_ham_words as f64 + vocabulary_size)).ln();
        }

        if spam_score > ham_score {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    /// Whether the model has seen at least one example of each class.
    pub fn is_trained(&self) -> bool {
        self.spam_message_count > 0 && self.ham_message_count > 0
    }

    /// Error unless both classes were seen during training.
    pub fn ensure_trained(&self) -> Result<()> {
        if self.is_trained() {
            Ok(())
        } else {
            Err(SpamFilterError::UntrainedModel)
        }
    }

    /// Class priors as `(p_spam, p_ham)`.
    pub fn priors(&self) -> (f64, f64) {
        (self.p_spam, self.p_ham)
    }

    pub fn summary(&self) -> TrainingSummary {
        TrainingSummary {
            message_count: self.spam_message_count + self.ham_message_count,
            spam_count: self.spam_message_count,
            ham_count: self.ham_message_count,
            vocabulary_size: self.vocabulary.len(),
            trained_at: self.trained_at,
        }
    }
}
