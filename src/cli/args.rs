use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Alphabet to encode with (default: settings.default_alphabet)
    #[arg(short = 'a', long)]
    pub alphabet: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Do not append a trailing newline
    #[arg(short = 'n', long)]
    pub no_newline: bool,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Alphabet to decode from (default: settings.default_alphabet)
    #[arg(short = 'a', long)]
    pub alphabet: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List available alphabets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific alphabet
    Show {
        /// Alphabet name
        alphabet: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
