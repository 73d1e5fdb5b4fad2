//! Command line argument parsing for the chunklex CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::FlushPolicy;

/// chunklex - streaming rule-driven tokenizer
#[derive(Parser, Debug, Clone)]
#[command(name = "chunklex")]
#[command(about = "Tokenize text with ordered regular-expression rules")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ChunklexArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ChunklexArgs {
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
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize text with a rule file
    Tokenize(TokenizeArgs),

    /// Load a rule file and list its rules in priority order
    Check(CheckArgs),
}

/// Arguments for tokenizing text
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Rule file (JSON)
    #[arg(value_name = "RULES_FILE")]
    pub rules_file: PathBuf,

    /// Text to tokenize; read from --input or stdin when omitted
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// File to read the text from
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Characters per top-level chunk (overrides the rule file)
    #[arg(long, env = "CHUNKLEX_CHUNK_SIZE")]
    pub chunk_size: Option<usize>,

    /// Characters per matching step (overrides the rule file)
    #[arg(long, env = "CHUNKLEX_STEP_SIZE")]
    pub step_size: Option<usize>,

    /// When pending text is force-committed (overrides the rule file)
    #[arg(long, value_name = "POLICY")]
    pub flush: Option<FlushMode>,

    /// Keep leading and trailing whitespace
    #[arg(long)]
    pub no_trim: bool,

    /// Show every resolved span, including ignored and dropped text
    #[arg(long)]
    pub trace: bool,

    /// Include tokenization statistics
    #[arg(long)]
    pub stats: bool,
}

/// Arguments for checking a rule file
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Rule file (JSON)
    #[arg(value_name = "RULES_FILE")]
    pub rules_file: PathBuf,
}

/// Flush policies selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlushMode {
    /// Flush after every chunk
    PerChunk,
    /// Flush only at end of input
    EndOfStream,
}

impl From<FlushMode> for FlushPolicy {
    fn from(mode: FlushMode) -> Self {
        match mode {
            FlushMode::PerChunk => FlushPolicy::PerChunk,
            FlushMode::EndOfStream => FlushPolicy::EndOfStream,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
