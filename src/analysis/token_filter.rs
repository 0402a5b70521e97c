//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers. They can
//! rewrite token text or drop tokens from the stream altogether.
//!
//! # Available Filters
//!
//! - [`letter::LetterFilter`] - Keeps only Unicode letters
//!
//! # Examples
//!
//! ```
//! use wordtally::analysis::token_filter::Filter;
//! use wordtally::analysis::token_filter::letter::LetterFilter;
//! use wordtally::analysis::token::Token;
//!
//! let filter = LetterFilter::new();
//! let tokens = vec![Token::new("lake.", 0), Token::new("--", 1), Token::new("don't", 2)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered.len(), 2);
//! assert_eq!(filtered[0].text, "lake");
//! assert_eq!(filtered[1].text, "dont");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Letters → Frequency Table
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod letter;

pub use letter::LetterFilter;
