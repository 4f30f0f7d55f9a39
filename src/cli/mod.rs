mod args;
mod commands;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};
use nb64::AlphabetRegistry;

use args::{ConfigAction, DecodeArgs, EncodeArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "nb64")]
#[command(version)]
#[command(
    about = "Base64 variant that keeps mixed ASCII and UTF-8 text short",
    long_about = "Encodes ASCII runs at 7 bits per byte and UTF-8 runs at 18 bits per codepoint, \
                  separating the two with a delimiter symbol. Supports codepoints up to U+3FFFF."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode bytes into symbols
    Encode(EncodeArgs),
    /// Decode symbols back into bytes
    Decode(DecodeArgs),
    /// Inspect the alphabet registry
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.global.log_filter()),
    )
    .format_timestamp(None)
    .init();

    // Load alphabet configuration with user overrides
    let config = AlphabetRegistry::load_with_overrides()?;

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Command::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Command::Config { action } => handlers::config::handle(action, &cli.global, &config),
    }
}
