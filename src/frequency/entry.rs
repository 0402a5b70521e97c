//! A single word and how often it occurs.

use std::fmt;

use serde::Serialize;

/// A word together with its occurrence count.
///
/// `word` carries the spelling of the word's first occurrence in the text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct WordFrequency {
    /// The word, as first seen.
    pub word: String,
    /// Number of occurrences (always at least 1 inside a table).
    pub frequency: usize,
}

impl WordFrequency {
    /// Create a new entry.
    pub fn new<S: Into<String>>(word: S, frequency: usize) -> Self {
        WordFrequency {
            word: word.into(),
            frequency,
        }
    }
}

impl fmt::Display for WordFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.word, self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(WordFrequency::new("lake", 1).to_string(), "lake - 1");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&WordFrequency::new("As", 2)).unwrap();
        assert_eq!(json, r#"{"word":"As","frequency":2}"#);
    }
}
