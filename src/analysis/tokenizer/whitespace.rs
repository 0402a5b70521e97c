//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// Characters that separate tokens.
///
/// Only these four count. Other Unicode whitespace (NBSP, vertical tab, ...)
/// stays inside the token and is removed later because it is not a letter.
pub const SEPARATORS: [char; 4] = [' ', '\r', '\n', '\t'];

/// A tokenizer that splits text on space, carriage return, line feed and tab.
///
/// Runs of separators, as well as leading and trailing separators, never
/// produce empty tokens.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut start = 0;

        // Every separator is a single ASCII byte, so offsets advance by len + 1.
        for piece in text.split(SEPARATORS) {
            if !piece.is_empty() {
                let end = start + piece.len();
                tokens.push(Token::with_offsets(piece, tokens.len(), start, end));
            }
            start += piece.len() + 1;
        }

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
