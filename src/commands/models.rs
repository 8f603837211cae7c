use clap::Subcommand;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate one key strictly between two bounds
    Between {
        /// Key immediately before the new position (omit for start of list)
        #[arg(long)]
        lower: Option<String>,
        /// Key immediately after the new position (omit for end of list)
        #[arg(long)]
        upper: Option<String>,
    },
    /// Generate several ascending keys spread between two bounds
    Spread {
        #[arg(long)]
        lower: Option<String>,
        #[arg(long)]
        upper: Option<String>,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Generate keys for appending to the end of a list
    Append {
        /// Current last key of the list
        #[arg(long)]
        after: Option<String>,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Generate keys for prepending to the start of a list, nearest first
    Prepend {
        /// Current first key of the list
        #[arg(long)]
        before: Option<String>,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Check that keys are canonical and strictly ascending
    Check { keys: Vec<String> },
}
