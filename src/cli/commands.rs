//! Command implementations for the wordtally CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, WordTallyError};
use crate::frequency::WordFrequencyAnalyzer;

/// Sentence used by the demo command.
pub const DEMO_TEXT: &str = "The sun shines over the lake";

/// Word looked up by the demo command.
pub const DEMO_WORD: &str = "the";

/// Number of words ranked by the demo command.
pub const DEMO_TOP_N: i64 = 3;

/// Execute a CLI command.
pub fn execute_command(args: WordTallyArgs) -> Result<()> {
    let analyzer = WordFrequencyAnalyzer::new();

    match args.command() {
        Command::Highest(input) => highest(&analyzer, &input, &args),
        Command::Frequency(freq_args) => frequency(&analyzer, &freq_args, &args),
        Command::Top(top_args) => top(&analyzer, &top_args, &args),
        Command::Demo => demo(&analyzer, &args),
    }
}

/// Print the highest frequency.
fn highest(
    analyzer: &WordFrequencyAnalyzer,
    input: &InputArgs,
    args: &WordTallyArgs,
) -> Result<()> {
    let text = read_input(input)?;

    output_result(
        &HighestFrequencyResult {
            highest_frequency: analyzer.calculate_highest_frequency(&text),
        },
        args,
    )
}

/// Print the frequency of one word.
fn frequency(
    analyzer: &WordFrequencyAnalyzer,
    freq_args: &FrequencyArgs,
    args: &WordTallyArgs,
) -> Result<()> {
    let text = read_input(&freq_args.input)?;

    output_result(
        &WordFrequencyResult {
            word: freq_args.word.clone(),
            frequency: analyzer.calculate_frequency_for_word(&text, &freq_args.word),
        },
        args,
    )
}

/// Print the most frequent words.
fn top(
    analyzer: &WordFrequencyAnalyzer,
    top_args: &TopArgs,
    args: &WordTallyArgs,
) -> Result<()> {
    let text = read_input(&top_args.input)?;

    output_result(
        &TopWordsResult {
            requested: top_args.n,
            words: analyzer.calculate_most_frequent_n_words(&text, top_args.n),
        },
        args,
    )
}

/// Run all three queries over the demo sentence.
fn demo(analyzer: &WordFrequencyAnalyzer, args: &WordTallyArgs) -> Result<()> {
    info!("Analyzing demo text: {DEMO_TEXT:?}");

    output_result(&run_demo(analyzer), args)
}

/// Compute the demo result.
pub fn run_demo(analyzer: &WordFrequencyAnalyzer) -> DemoResult {
    DemoResult {
        text: DEMO_TEXT.to_string(),
        highest_frequency: analyzer.calculate_highest_frequency(DEMO_TEXT),
        word: DEMO_WORD.to_string(),
        frequency: analyzer.calculate_frequency_for_word(DEMO_TEXT, DEMO_WORD),
        top: analyzer.calculate_most_frequent_n_words(DEMO_TEXT, DEMO_TOP_N),
    }
}

/// Resolve the input text: `--text`, then `--file`, then stdin.
pub fn read_input(input: &InputArgs) -> Result<String> {
    read_input_from(input, io::stdin().lock())
}

/// Like [`read_input`], reading from `stdin` when no text or file is given.
pub fn read_input_from<R: Read>(input: &InputArgs, mut stdin: R) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    if let Some(path) = &input.file {
        return read_text_file(path);
    }

    debug!("Reading text from stdin");
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(text)
}

/// Read a UTF-8 text file.
fn read_text_file(path: &Path) -> Result<String> {
    info!("Reading text from: {}", path.display());
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| {
        WordTallyError::invalid_argument(format!("{} is not valid UTF-8", path.display()))
    })
}
