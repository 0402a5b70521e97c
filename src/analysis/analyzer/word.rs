//! Word analyzer: the default pipeline for counting words.
//!
//! # Pipeline
//!
//! 1. WhitespaceTokenizer (space, CR, LF, TAB)
//! 2. LetterFilter (keep letters, drop tokens without any)
//!
//! No lowercasing happens here. Words keep their casing so the frequency
//! table can report the first spelling it saw.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::letter::LetterFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

/// The default analyzer used by [`WordFrequencyAnalyzer`](crate::frequency::WordFrequencyAnalyzer).
#[derive(Clone, Debug)]
pub struct WordAnalyzer {
    inner: PipelineAnalyzer,
}

impl WordAnalyzer {
    /// Create a new word analyzer.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LetterFilter::new()))
            .with_name("word");

        WordAnalyzer { inner: analyzer }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for WordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
