//! Text analysis for word counting.
//!
//! This module turns raw text into the stream of cleaned words that the
//! frequency table consumes. A tokenizer splits the text, then a chain of
//! filters rewrites or drops tokens:
//!
//! ```text
//! Raw Text → WhitespaceTokenizer → LetterFilter → words
//! ```
//!
//! [`analyzer::WordAnalyzer`] packages that default pipeline;
//! [`analyzer::PipelineAnalyzer`] builds custom ones.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
