//! The word frequency query API.

use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::{Analyzer, WordAnalyzer};
use crate::frequency::entry::WordFrequency;
use crate::frequency::table::FrequencyTable;

/// Computes word frequency statistics over plain text.
///
/// Every query re-analyzes its input and builds a fresh [`FrequencyTable`]
/// local to the call. The analyzer itself is immutable, so a single instance
/// can be shared across threads.
///
/// All queries are total: any text (including the empty string) and any `n`
/// produce a result.
#[derive(Clone)]
pub struct WordFrequencyAnalyzer {
    analyzer: Arc<dyn Analyzer>,
}

impl WordFrequencyAnalyzer {
    /// Create an analyzer using the default [`WordAnalyzer`] pipeline.
    pub fn new() -> Self {
        WordFrequencyAnalyzer {
            analyzer: Arc::new(WordAnalyzer::new()),
        }
    }

    /// Create an analyzer that tabulates the output of a custom pipeline.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        WordFrequencyAnalyzer { analyzer }
    }

    /// Get the text analyzer feeding the frequency table.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Build the frequency table for `text`.
    pub fn word_frequency(&self, text: &str) -> FrequencyTable {
        FrequencyTable::from_text(self.analyzer.as_ref(), text)
    }

    /// The highest occurrence count of any word in `text`, or 0 if it has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtally::frequency::WordFrequencyAnalyzer;
    ///
    /// let analyzer = WordFrequencyAnalyzer::new();
    /// assert_eq!(analyzer.calculate_highest_frequency("As long as"), 2);
    /// assert_eq!(analyzer.calculate_highest_frequency(""), 0);
    /// ```
    pub fn calculate_highest_frequency(&self, text: &str) -> usize {
        let highest = self.word_frequency(text).highest_frequency();
        debug!("highest frequency: {highest}");
        highest
    }

    /// How often `word` occurs in `text`, ignoring case.
    ///
    /// `word` is matched as given against the cleaned words of `text`, so a
    /// query such as `"the,"` never matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtally::frequency::WordFrequencyAnalyzer;
    ///
    /// let analyzer = WordFrequencyAnalyzer::new();
    /// assert_eq!(analyzer.calculate_frequency_for_word("My name is Aditi", "name"), 1);
    /// assert_eq!(analyzer.calculate_frequency_for_word("My name is Aditi", "xyz"), 0);
    /// ```
    pub fn calculate_frequency_for_word(&self, text: &str, word: &str) -> usize {
        let frequency = self.word_frequency(text).frequency(word);
        debug!("frequency of {word:?}: {frequency}");
        frequency
    }

    /// The `n` most frequent words of `text`.
    ///
    /// Sorted by frequency descending, then by word ascending ignoring case.
    /// Returns an empty list when `n <= 0` and every word when `n` exceeds the
    /// number of distinct words.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtally::frequency::{WordFrequency, WordFrequencyAnalyzer};
    ///
    /// let analyzer = WordFrequencyAnalyzer::new();
    /// let top = analyzer.calculate_most_frequent_n_words("As long as", 2);
    ///
    /// assert_eq!(top, vec![WordFrequency::new("As", 2), WordFrequency::new("long", 1)]);
    /// assert!(analyzer.calculate_most_frequent_n_words("As long as", -1).is_empty());
    /// ```
    pub fn calculate_most_frequent_n_words(&self, text: &str, n: i64) -> Vec<WordFrequency> {
        if n <= 0 {
            return Vec::new();
        }

        let n = usize::try_from(n).unwrap_or(usize::MAX);
        let top = self.word_frequency(text).top(n);
        debug!("top {n} words: {} returned", top.len());
        top
    }
}

impl Default for WordFrequencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WordFrequencyAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordFrequencyAnalyzer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::PipelineAnalyzer;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

    const SUN: &str = "The sun shines over the lake";

    fn pairs(entries: &[WordFrequency]) -> Vec<(&str, usize)> {
        entries
            .iter()
            .map(|e| (e.word.as_str(), e.frequency))
            .collect()
    }

    #[test]
    fn test_highest_frequency() {
        let analyzer = WordFrequencyAnalyzer::new();

        assert_eq!(analyzer.calculate_highest_frequency(SUN), 2);
        assert_eq!(analyzer.calculate_highest_frequency("As long as"), 2);
        assert_eq!(analyzer.calculate_highest_frequency(""), 0);
        assert_eq!(analyzer.calculate_highest_frequency(" \t\r\n 123 ?!"), 0);
    }

    #[test]
    fn test_frequency_for_word() {
        let analyzer = WordFrequencyAnalyzer::new();

        assert_eq!(analyzer.calculate_frequency_for_word(SUN, "the"), 2);
        assert_eq!(analyzer.calculate_frequency_for_word(SUN, "THE"), 2);
        assert_eq!(analyzer.calculate_frequency_for_word(SUN, "the,"), 0);
        assert_eq!(analyzer.calculate_frequency_for_word(SUN, ""), 0);
        assert_eq!(analyzer.calculate_frequency_for_word("", "the"), 0);
    }

    #[test]
    fn test_most_frequent_n_words() {
        let analyzer = WordFrequencyAnalyzer::new();

        assert_eq!(
            pairs(&analyzer.calculate_most_frequent_n_words(SUN, 3)),
            vec![("The", 2), ("lake", 1), ("over", 1)]
        );
        assert_eq!(
            pairs(&analyzer.calculate_most_frequent_n_words("As long as", 2)),
            vec![("As", 2), ("long", 1)]
        );
    }

    #[test]
    fn test_most_frequent_n_words_bounds() {
        let analyzer = WordFrequencyAnalyzer::new();

        assert!(analyzer.calculate_most_frequent_n_words(SUN, 0).is_empty());
        assert!(analyzer.calculate_most_frequent_n_words(SUN, -5).is_empty());
        assert!(analyzer.calculate_most_frequent_n_words("", 3).is_empty());
        assert_eq!(analyzer.calculate_most_frequent_n_words(SUN, 100).len(), 5);
        assert_eq!(
            analyzer.calculate_most_frequent_n_words(SUN, i64::MAX).len(),
            5
        );
    }

    #[test]
    fn test_result_is_independent_copy() {
        let analyzer = WordFrequencyAnalyzer::new();

        let mut first = analyzer.calculate_most_frequent_n_words(SUN, 2);
        first[0].frequency = 99;
        first.clear();

        let second = analyzer.calculate_most_frequent_n_words(SUN, 2);
        assert_eq!(pairs(&second), vec![("The", 2), ("lake", 1)]);
    }

    #[test]
    fn test_custom_analyzer() {
        // Without the letter filter, punctuation stays part of the word.
        let pipeline = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
        let analyzer = WordFrequencyAnalyzer::with_analyzer(Arc::new(pipeline));

        assert_eq!(analyzer.calculate_frequency_for_word("the, the", "the,"), 1);
        assert_eq!(analyzer.analyzer().name(), "pipeline");
    }

    #[test]
    fn test_shared_across_threads() {
        let analyzer = Arc::new(WordFrequencyAnalyzer::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let analyzer = Arc::clone(&analyzer);
                std::thread::spawn(move || analyzer.calculate_highest_frequency(SUN))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    }
}
