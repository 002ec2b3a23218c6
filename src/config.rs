use crate::cli::Cli;

/// Largest sum a table may be built for unless overridden.
pub const DEFAULT_MAX_SUM_LIMIT: u64 = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `sum: [w w w]` line per sum
    #[default]
    Text,
    /// JSON array of `{"sum", "subset"}` objects
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_sum_limit: u64,
    pub format: OutputFormat,
    pub reachable_only: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_sum_limit: DEFAULT_MAX_SUM_LIMIT,
            format: OutputFormat::Text,
            reachable_only: false,
        }
    }
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            max_sum_limit: cli.limit,
            format: cli.format,
            reachable_only: cli.reachable_only,
        }
    }
}
