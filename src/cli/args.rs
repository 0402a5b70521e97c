//! Command line argument parsing for the wordtally CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// wordtally - word frequency statistics for plain text
#[derive(Parser, Debug, Clone)]
#[command(name = "wordtally")]
#[command(about = "Word frequency statistics for plain text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordTallyArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute (defaults to `demo`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl WordTallyArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// The command to run, falling back to the demo.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Demo)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the highest frequency of any word
    Highest(InputArgs),

    /// Print how often one word occurs
    Frequency(FrequencyArgs),

    /// Print the most frequent words
    Top(TopArgs),

    /// Run all three queries over a fixed sample sentence
    Demo,
}

/// Where to read the text from. Without either flag, stdin is read.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to analyze
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File containing the text to analyze
    #[arg(short = 'i', long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for the frequency of a single word
#[derive(Args, Debug, Clone)]
pub struct FrequencyArgs {
    /// Word to count (matched ignoring case, not cleaned)
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the most frequent words
#[derive(Args, Debug, Clone)]
pub struct TopArgs {
    /// Number of words to show; zero or negative shows none
    #[arg(
        short,
        long,
        default_value = "10",
        env = "WORDTALLY_TOP",
        allow_negative_numbers = true
    )]
    pub n: i64,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_demo() {
        let args = WordTallyArgs::try_parse_from(["wordtally"]).unwrap();
        assert!(matches!(args.command(), Command::Demo));
        assert_eq!(args.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_verbosity_levels() {
        let args = WordTallyArgs::try_parse_from(["wordtally", "demo"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = WordTallyArgs::try_parse_from(["wordtally", "-vv", "demo"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = WordTallyArgs::try_parse_from(["wordtally", "-v", "--quiet", "demo"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            WordTallyArgs::try_parse_from(["wordtally", "--format", "json", "demo"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_frequency_command() {
        let args =
            WordTallyArgs::try_parse_from(["wordtally", "frequency", "the", "--text", "the The"])
                .unwrap();

        if let Command::Frequency(freq_args) = args.command() {
            assert_eq!(freq_args.word, "the");
            assert_eq!(freq_args.input.text.as_deref(), Some("the The"));
            assert!(freq_args.input.file.is_none());
        } else {
            panic!("Expected Frequency command");
        }
    }

    #[test]
    fn test_top_accepts_negative_n() {
        let args =
            WordTallyArgs::try_parse_from(["wordtally", "top", "-n", "-3", "-t", "a"]).unwrap();

        if let Command::Top(top_args) = args.command() {
            assert_eq!(top_args.n, -3);
        } else {
            panic!("Expected Top command");
        }
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let result = WordTallyArgs::try_parse_from([
            "wordtally", "highest", "--text", "a", "--file", "a.txt",
        ]);
        assert!(result.is_err());
    }
}
