//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! The pipeline tokenizes first, then applies the filters sequentially in
//! the order they were added.
//!
//! # Examples
//!
//! ```
//! use wordtally::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use wordtally::analysis::token_filter::letter::LetterFilter;
//! use wordtally::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//! use std::sync::Arc;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(LetterFilter::new()))
//!     .with_name("letters_only");
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello, 42 world").collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The configured name of this pipeline.
    pub fn label(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    fn name(&self) -> &'static str {
        // The configured name is not 'static; see `label`.
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::letter::LetterFilter;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

    /// Test filter that upper-cases every token.
    struct ShoutFilter;

    impl Filter for ShoutFilter {
        fn filter(&self, tokens: TokenStream) -> TokenStream {
            Box::new(tokens.map(|t| {
                let upper = t.text.to_uppercase();
                t.with_text(upper)
            }))
        }

        fn name(&self) -> &'static str {
            "shout"
        }
    }

    #[test]
    fn test_tokenizer_only() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));

        let tokens: Vec<Token> = analyzer.analyze("over the lake.").collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].text, "lake.");
        assert_eq!(analyzer.label(), "pipeline_whitespace");
    }

    #[test]
    fn test_filters_apply_in_order() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LetterFilter::new()))
            .add_filter(Arc::new(ShoutFilter));

        let tokens: Vec<Token> = analyzer.analyze("sun, 7 lake").collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "SUN");
        assert_eq!(tokens[1].text, "LAKE");
    }

    #[test]
    fn test_debug_lists_stages() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LetterFilter::new()))
            .with_name("custom");

        let debug = format!("{analyzer:?}");
        assert!(debug.contains("custom"));
        assert!(debug.contains("whitespace"));
        assert!(debug.contains("letter"));
        assert_eq!(analyzer.filters().len(), 1);
        assert_eq!(analyzer.tokenizer().name(), "whitespace");
    }
}
