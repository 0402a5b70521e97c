//! # wordtally
//!
//! Word frequency statistics for plain text.
//!
//! ## Features
//!
//! - Highest occurrence count of any word
//! - Occurrence count of a specific word
//! - Top-N most frequent words with deterministic tie-breaking
//! - Case-insensitive counting that keeps each word's first spelling
//! - Pluggable text analysis pipeline (tokenizer + filters)

pub mod analysis;
pub mod cli;
pub mod error;
pub mod frequency;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer, WordAnalyzer};
    pub use crate::error::{Result, WordTallyError};
    pub use crate::frequency::{FrequencyTable, WordFrequency, WordFrequencyAnalyzer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
