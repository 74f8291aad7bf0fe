//! Command line argument parsing for the simplifier CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Simplifier - swap synonyms in text for canonical dictionary words
#[derive(Parser, Debug, Clone)]
#[command(name = "simplifier")]
#[command(about = "Swap synonyms in text for canonical dictionary words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SimplifierArgs {
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

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SIMPLIFIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Dictionary file, one canonical word per line
    #[arg(short, long, value_name = "DICTIONARY_FILE", env = "SIMPLIFIER_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Word list file, one comma-separated synonym group per line
    #[arg(short, long, value_name = "WORD_LIST_FILE", env = "SIMPLIFIER_WORD_LIST")]
    pub word_list: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SimplifierArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Simplify the given text and exit
    Swap(SwapArgs),

    /// Prompt for source files, then simplify lines read from stdin
    Interactive,

    /// Show the dictionary and word mapping built from the source files
    Inspect(InspectArgs),
}

/// Arguments for swapping text
#[derive(Parser, Debug, Clone)]
pub struct SwapArgs {
    /// Text to simplify; multiple arguments are joined with spaces
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,
}

impl SwapArgs {
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for inspecting a thesaurus
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// List every word and its canonical word
    #[arg(short, long)]
    pub entries: bool,
}

/// Output formats available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
