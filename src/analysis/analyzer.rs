//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod pipeline;
mod word;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use word::WordAnalyzer;
