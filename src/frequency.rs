//! Word frequency statistics.
//!
//! [`WordFrequencyAnalyzer`] answers three questions about a text: the
//! highest occurrence count of any word, the count for a specific word, and
//! the N most frequent words. Each query tabulates the text from scratch into
//! a [`FrequencyTable`]; nothing is cached between calls.
//!
//! Words are compared case-insensitively but reported with the casing of
//! their first occurrence.
//!
//! # Examples
//!
//! ```
//! use wordtally::frequency::WordFrequencyAnalyzer;
//!
//! let analyzer = WordFrequencyAnalyzer::new();
//! let text = "The sun shines over the lake";
//!
//! assert_eq!(analyzer.calculate_highest_frequency(text), 2);
//! assert_eq!(analyzer.calculate_frequency_for_word(text, "the"), 2);
//!
//! let top = analyzer.calculate_most_frequent_n_words(text, 3);
//! assert_eq!(top[0].word, "The");
//! assert_eq!(top[1].word, "lake");
//! assert_eq!(top[2].word, "over");
//! ```

pub mod analyzer;
pub mod entry;
pub mod table;

pub use analyzer::WordFrequencyAnalyzer;
pub use entry::WordFrequency;
pub use table::FrequencyTable;
