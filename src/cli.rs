use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::{DEFAULT_MAX_SUM_LIMIT, OutputFormat};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Largest sum a table may be built for
    #[arg(long, env = "SUBSET_SUMS_LIMIT", default_value_t = DEFAULT_MAX_SUM_LIMIT, global = true)]
    pub limit: u64,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    /// Leave unreachable sums out of the output
    #[arg(long, global = true)]
    pub reachable_only: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a subset for every sum from 0 to the total of all weights
    All {
        /// Weights, in order
        weights: Vec<u64>,
        /// Read weights from a JSON file
        #[arg(short, long, conflicts_with = "weights")]
        file: Option<PathBuf>,
        /// Write the JSON report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print subsets for the given sums only
    Query {
        /// Weights, in order, comma separated
        #[arg(short, long, value_delimiter = ',', required_unless_present = "file")]
        weights: Vec<u64>,
        /// Read weights from a JSON file
        #[arg(short, long, conflicts_with = "weights")]
        file: Option<PathBuf>,
        /// Sums to look up
        #[arg(required = true)]
        sums: Vec<u64>,
        /// Write the JSON report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build the table once and query it interactively
    Repl {
        /// Weights, in order
        weights: Vec<u64>,
        /// Read weights from a JSON file
        #[arg(short, long, conflicts_with = "weights")]
        file: Option<PathBuf>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let cli = Cli::try_parse_from(["subset-sums", "query", "--weights", "3,4", "7", "5"])
            .unwrap();
        match cli.command {
            Command::Query { weights, sums, .. } => {
                assert_eq!(weights, vec![3, 4]);
                assert_eq!(sums, vec![7, 5]);
            }
            _ => panic!("expected query"),
        }
    }

    #[test]
    fn test_parse_query_repeated_weights() {
        let cli = Cli::try_parse_from(["subset-sums", "query", "-w", "3", "-w", "4,5", "9"])
            .unwrap();
        match cli.command {
            Command::Query { weights, sums, .. } => {
                assert_eq!(weights, vec![3, 4, 5]);
                assert_eq!(sums, vec![9]);
            }
            _ => panic!("expected query"),
        }
        assert!(Cli::try_parse_from(["subset-sums", "query", "-w", "3,4"]).is_err());
    }

    #[test]
    fn test_rejects_negative_weight() {
        assert!(Cli::try_parse_from(["subset-sums", "all", "3", "-4"]).is_err());
        assert!(Cli::try_parse_from(["subset-sums", "all", "3", "x"]).is_err());
    }

    #[test]
    fn test_file_conflicts_with_weights() {
        assert!(Cli::try_parse_from(["subset-sums", "all", "3", "--file", "w.json"]).is_err());
        assert!(Cli::try_parse_from(["subset-sums", "query", "-f", "w.json", "7"]).is_ok());
        assert!(Cli::try_parse_from(["subset-sums", "query", "7"]).is_err());
    }
}
