//! Per-call word frequency tabulation.
//!
//! A [`FrequencyTable`] counts words case-insensitively while remembering the
//! casing of each word's first occurrence and the order in which words first
//! appeared. Lookups go through a map keyed by the case-folded word, so
//! building a table is linear in the number of tokens.

use std::cmp::Reverse;

use ahash::AHashMap;
use log::{debug, trace};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::frequency::entry::WordFrequency;

/// Fold a word for case-insensitive comparison.
///
/// Each character is mapped to its uppercase form on its own. Characters
/// whose uppercase expands to several characters (`ß`) are kept as they are,
/// so folding never changes the character count. `ς`, `σ` and `Σ` share a key,
/// as do `ſ` and `s`. Ordering the folded keys by code point gives the
/// tie-break order of the ranking.
pub fn fold_case(word: &str) -> String {
    word.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Word counts in first-occurrence order.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    /// Entries in first-occurrence order.
    entries: Vec<WordFrequency>,
    /// Folded form of each entry's word (parallel to `entries`).
    keys: Vec<String>,
    /// Folded word to index into `entries`.
    index: AHashMap<String, usize>,
    /// Total number of tokens counted.
    total: usize,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    /// Tabulate every token of an analyzed stream.
    pub fn from_tokens(tokens: TokenStream) -> Self {
        let mut table = FrequencyTable::new();
        for token in tokens {
            trace!(
                "token {} at bytes {}..{}: {:?}",
                token.position, token.start_offset, token.end_offset, token.text
            );
            table.add(&token.text);
        }
        debug!(
            "tabulated {} tokens into {} distinct words",
            table.total,
            table.len()
        );
        table
    }

    /// Analyze `text` with `analyzer` and tabulate the result.
    pub fn from_text(analyzer: &dyn Analyzer, text: &str) -> Self {
        Self::from_tokens(analyzer.analyze(text))
    }

    /// Count one occurrence of `word`.
    ///
    /// The first spelling seen for a folded form is the one kept. Empty words
    /// are ignored.
    pub fn add(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let key = fold_case(word);
        match self.index.get(&key) {
            Some(&i) => self.entries[i].frequency += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.keys.push(key);
                self.entries.push(WordFrequency::new(word, 1));
            }
        }
        self.total += 1;
    }

    /// Count for `word`, compared case-insensitively; 0 if absent.
    pub fn frequency(&self, word: &str) -> usize {
        self.get(word).map_or(0, |entry| entry.frequency)
    }

    /// The entry matching `word` case-insensitively.
    pub fn get(&self, word: &str) -> Option<&WordFrequency> {
        self.index.get(&fold_case(word)).map(|&i| &self.entries[i])
    }

    /// Highest count in the table, or 0 when empty.
    pub fn highest_frequency(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.frequency)
            .max()
            .unwrap_or(0)
    }

    /// All entries, most frequent first, ties broken by folded word ascending.
    pub fn ranked(&self) -> Vec<WordFrequency> {
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by_key(|&i| (Reverse(self.entries[i].frequency), &self.keys[i]));
        order.into_iter().map(|i| self.entries[i].clone()).collect()
    }

    /// The first `n` entries of [`ranked`](Self::ranked).
    pub fn top(&self, n: usize) -> Vec<WordFrequency> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Entries in first-occurrence order.
    pub fn entries(&self) -> &[WordFrequency] {
        &self.entries
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no word has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens tabulated.
    pub fn total(&self) -> usize {
        self.total
    }
}
