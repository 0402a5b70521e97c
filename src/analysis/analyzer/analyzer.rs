//! Core analyzer trait definition.
//!
//! Analyzers are the complete text processing pipeline between raw text and
//! the frequency table:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → FrequencyTable
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 .. N
//! ```
//!
//! # Available Implementations
//!
//! - [`WordAnalyzer`](super::WordAnalyzer) - Whitespace split + letter extraction (the default)
//! - [`PipelineAnalyzer`](super::PipelineAnalyzer) - Custom tokenizer + filter chains
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use wordtally::analysis::analyzer::Analyzer;
//! use wordtally::analysis::token::TokenStream;
//!
//! struct SilentAnalyzer;
//!
//! impl Analyzer for SilentAnalyzer {
//!     fn analyze(&self, _text: &str) -> TokenStream {
//!         Box::new(std::iter::empty())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "silent"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// Analysis is total: any input text yields a token stream, possibly empty.
/// The trait requires `Send + Sync` so that one analyzer can serve queries
/// from several threads at once.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtally::analysis::analyzer::{Analyzer, WordAnalyzer};
    ///
    /// let analyzer = WordAnalyzer::new();
    /// let tokens: Vec<_> = analyzer.analyze("The sun, 2 lakes!").collect();
    ///
    /// assert_eq!(tokens.len(), 3);
    /// assert_eq!(tokens[1].text, "sun");
    /// assert_eq!(tokens[2].text, "lakes");
    /// ```
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
