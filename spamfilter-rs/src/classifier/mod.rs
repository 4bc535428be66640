//! Naive Bayes spam classification
//!
//! Tokenization, training, prediction and held-out evaluation.

pub mod eval;
pub mod model;
pub mod tokenizer;
pub mod types;

pub use eval::{evaluate, EvaluationReport};
pub use model::NaiveBayesModel;
pub use tokenizer::tokenize;
pub use types::*;
