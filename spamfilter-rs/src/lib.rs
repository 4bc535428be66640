//! spamfilter-rs: Naive Bayes spam classification service
//!
//! Trains a spam/ham classifier on a labeled text corpus and serves
//! per-message classification over HTTP.
//!
//! # Features
//!
//! - **Resilient corpus loader**: reassembles logical records from a noisy
//!   delimited file whose message fields may contain delimiters, quotes and
//!   literal newlines
//! - **Naive Bayes model**: log-space scoring with Laplace add-one smoothing,
//!   trained once into an immutable value
//! - **HTTP API**: classify one message per request against the model
//!   trained at startup
//! - **Batch evaluator**: held-out accuracy reporting over a shuffled split
//!
//! # Example
//!
//! ```
//! use spamfilter_rs::classifier::{Label, LabeledMessage, NaiveBayesModel};
//!
//! let corpus = vec![
//!     LabeledMessage::new("limited time offer", Label::Spam),
//!     LabeledMessage::new("see you at lunch", Label::Ham),
//! ];
//!
//! let model = NaiveBayesModel::train(&corpus);
//! assert_eq!(model.predict("free offer"), Label::Spam);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`classifier`]: Tokenizer, model, evaluation
//! - [`corpus`]: Record assembly and corpus loading
//! - [`api`]: HTTP classification endpoint

pub mod api;
pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;

// Re-export commonly used types
pub use classifier::{Label, LabeledMessage, NaiveBayesModel};
pub use config::Config;
pub use error::{Result, SpamFilterError};
