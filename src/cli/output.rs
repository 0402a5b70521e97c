//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, WordTallyArgs};
use crate::error::Result;
use crate::frequency::WordFrequency;

/// Result structure for the highest frequency query.
#[derive(Debug, Serialize)]
pub struct HighestFrequencyResult {
    pub highest_frequency: usize,
}

/// Result structure for the single word query.
#[derive(Debug, Serialize)]
pub struct WordFrequencyResult {
    pub word: String,
    pub frequency: usize,
}

/// Result structure for the top-N query.
#[derive(Debug, Serialize)]
pub struct TopWordsResult {
    pub requested: i64,
    pub words: Vec<WordFrequency>,
}

/// Result structure for the demo run.
#[derive(Debug, Serialize)]
pub struct DemoResult {
    pub text: String,
    pub highest_frequency: usize,
    pub word: String,
    pub frequency: usize,
    pub top: Vec<WordFrequency>,
}

/// Results that know how to print themselves for people.
pub trait HumanOutput {
    /// The lines to print in human format.
    fn human_lines(&self) -> Vec<String>;
}

impl HumanOutput for HighestFrequencyResult {
    fn human_lines(&self) -> Vec<String> {
        vec![format!("Highest frequency: {}", self.highest_frequency)]
    }
}

impl HumanOutput for WordFrequencyResult {
    fn human_lines(&self) -> Vec<String> {
        vec![format!(
            "Frequency for word '{}': {}",
            self.word, self.frequency
        )]
    }
}

impl HumanOutput for TopWordsResult {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Most frequent {} words:", self.words.len())];
        lines.extend(self.words.iter().map(|entry| entry.to_string()));
        lines
    }
}

impl HumanOutput for DemoResult {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Highest frequency: {}", self.highest_frequency),
            format!("Frequency for word '{}': {}", self.word, self.frequency),
            format!("Most frequent {} words:", self.top.len()),
        ];
        lines.extend(self.top.iter().map(|entry| entry.to_string()));
        lines
    }
}

/// Render a result in the format selected on the command line.
pub fn render_result<T: Serialize + HumanOutput>(
    result: &T,
    args: &WordTallyArgs,
) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.human_lines().join("\n")),
        OutputFormat::Json => render_json(result, args.pretty),
    }
}

/// Render and print a result to stdout.
pub fn output_result<T: Serialize + HumanOutput>(
    result: &T,
    args: &WordTallyArgs,
) -> Result<()> {
    println!("{}", render_result(result, args)?);
    Ok(())
}

/// Output in JSON format.
fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
