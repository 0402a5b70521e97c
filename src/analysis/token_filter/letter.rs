//! Letter filter implementation.
//!
//! Strips every character outside the Unicode letter category (`\p{L}`) from
//! a token while keeping the remaining letters in order. Digits, letter-like
//! numerals, symbols, combining marks and stray whitespace all disappear; a
//! token made only of those is dropped.
//!
//! # Examples
//!
//! ```
//! use wordtally::analysis::token_filter::letter::clean_word;
//!
//! assert_eq!(clean_word("the,"), "the");
//! assert_eq!(clean_word("R2-D2"), "RD");
//! assert_eq!(clean_word("1984"), "");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// Runs of characters in the Unicode general category Letter.
static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+").expect("Letter pattern should be valid"));

/// Return the letters of `word`, in order.
pub fn clean_word(word: &str) -> String {
    LETTERS.find_iter(word).map(|m| m.as_str()).collect()
}

/// A filter that reduces each token to its letters.
///
/// Letters keep their original case. Tokens with no letters at all are
/// removed from the stream; positions and offsets of the survivors are left
/// as the tokenizer assigned them.
#[derive(Clone, Debug, Default)]
pub struct LetterFilter;

impl LetterFilter {
    /// Create a new letter filter.
    pub fn new() -> Self {
        LetterFilter
    }
}

impl Filter for LetterFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens = tokens
            .filter_map(|token| {
                let cleaned = clean_word(&token.text);
                if cleaned.is_empty() {
                    None
                } else if cleaned.len() == token.text.len() {
                    Some(token)
                } else {
                    Some(token.with_text(cleaned))
                }
            })
            .collect::<Vec<_>>();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_clean_word() {
        assert_eq!(clean_word("Hello!"), "Hello");
        assert_eq!(clean_word("(over)"), "over");
        assert_eq!(clean_word("e-mail"), "email");
        assert_eq!(clean_word("..."), "");
        assert_eq!(clean_word(""), "");
    }

    #[test]
    fn test_clean_word_unicode_letters() {
        assert_eq!(clean_word("Ärger,"), "Ärger");
        assert_eq!(clean_word("日本語。"), "日本語");
        assert_eq!(clean_word("a\u{00A0}b"), "ab");
    }

    #[test]
    fn test_clean_word_drops_non_letter_categories() {
        // Circled letter (So) and Roman numeral (Nl) are not letters.
        assert_eq!(clean_word("\u{24B6}"), "");
        assert_eq!(clean_word("\u{216B}"), "");
        assert_eq!(clean_word("x\u{2167}y"), "xy");
        // Devanagari vowel signs (Mc) are dropped, the consonants stay.
        assert_eq!(clean_word("किताब"), "कतब");
        // Combining acute accent (Mn) is dropped from decomposed text.
        assert_eq!(clean_word("e\u{0301}te\u{0301}"), "ete");
    }

    #[test]
    fn test_letter_filter() {
        let filter = LetterFilter::new();
        let tokens = vec![
            Token::with_offsets("The", 0, 0, 3),
            Token::with_offsets("42", 1, 4, 6),
            Token::with_offsets("lake.", 2, 7, 12),
            Token::with_offsets("\u{216B}", 3, 13, 16),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "The");
        assert_eq!(result[1].text, "lake");
        assert_eq!(result[1].position, 2);
        assert_eq!(result[1].end_offset, 12);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LetterFilter::new().name(), "letter");
    }
}
