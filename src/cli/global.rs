use clap::{ArgAction, Args};

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Suppress warnings and informational notices
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true, default_value = "104857600")]
    pub max_size: usize,

    /// Process inputs exceeding --max-size limit
    #[arg(long, global = true)]
    pub force: bool,
}

impl GlobalArgs {
    /// Log filter implied by -q / -v, used when RUST_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "off";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
