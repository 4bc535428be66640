//! Text normalization and tokenization
//!
//! Turns raw message text into lowercase content words: everything that is
//! not an ASCII letter, digit or whitespace is stripped, then stop words
//! are filtered out.

/// Common English function words excluded from the token stream.
///
/// Kept sorted so membership is a binary search.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "can", "cannot", "could",
    "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "with", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

/// Tokenize a message into its content words.
///
/// Lowercases, strips every character that is not an ASCII letter, digit or
/// whitespace (punctuation, apostrophes and accented characters all go),
/// splits on whitespace runs and drops stop words. Deterministic and
/// order-preserving; duplicates are retained.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() || c.is_ascii_whitespace() {
            cleaned.push(c);
        }
    }

    cleaned
        .split_ascii_whitespace()
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_are_sorted() {
        // binary_search relies on this
        for pair in STOP_WORDS.windows(2) {
            assert!(pair[0] < pair[1], "{:?} out of order", pair);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(tokenize("Hello, WORLD!!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_stop_words_removed() {
        assert_eq!(tokenize("the cat sat"), vec!["cat", "sat"]);
    }

    #[test]
    fn test_case_insensitive_stable() {
        let text = "Win FREE Money Now";
        assert_eq!(tokenize(text), tokenize(&text.to_uppercase()));
    }

    #[test]
    fn test_no_stop_word_survives() {
        let tokens = tokenize("I have been to the shop and it was very good");
        for token in &tokens {
            assert!(!is_stop_word(token), "stop word {:?} in output", token);
        }
        assert_eq!(tokens, vec!["shop", "good"]);
    }

    #[test]
    fn test_apostrophes_collapse_contractions() {
        // "it's" becomes "its", which is itself a stop word
        assert!(tokenize("it's").is_empty());
        assert_eq!(tokenize("don't stop"), vec!["dont", "stop"]);
    }

    #[test]
    fn test_non_ascii_stripped() {
        assert_eq!(tokenize("café £900 prize"), vec!["caf", "900", "prize"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        assert_eq!(tokenize("win win lunch win"), vec!["win", "win", "lunch", "win"]);
    }
}
