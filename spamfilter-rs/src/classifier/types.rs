//! Classifier types and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message class assigned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Unwanted solicitation
    Spam,
    /// Legitimate message
    Ham,
}

impl Label {
    /// Parse a corpus label. Anything other than "spam" (any case) is ham.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("spam") {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled training example
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledMessage {
    /// Raw message text
    pub text: String,
    /// Recorded class
    pub label: Label,
}

impl LabeledMessage {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Summary of a completed training run
#[derive(Debug, Clone, Serialize)]
pub struct TrainingSummary {
    /// Total messages trained on
    pub message_count: u64,
    /// Messages labeled spam
    pub spam_count: u64,
    /// Messages labeled ham
    pub ham_count: u64,
    /// Distinct tokens observed across both classes
    pub vocabulary_size: usize,
    /// When training finished
    pub trained_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse_case_insensitive() {
        assert_eq!(Label::parse("spam"), Label::Spam);
        assert_eq!(Label::parse("Spam"), Label::Spam);
        assert_eq!(Label::parse("SPAM"), Label::Spam);
        assert_eq!(Label::parse("ham"), Label::Ham);
    }

    #[test]
    fn test_unknown_label_is_ham() {
        assert_eq!(Label::parse("junk"), Label::Ham);
        assert_eq!(Label::parse(""), Label::Ham);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Spam.to_string(), "spam");
        assert_eq!(Label::Ham.to_string(), "ham");
    }
}
