//! CLI argument definitions for kaiden.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "kaiden")]
#[command(about = "IIDX SP play history analyzer", version)]
pub struct Args {
    /// Config file (TOML)
    #[arg(long, value_name = "FILE", env = "KAIDEN_CONFIG")]
    pub config: Option<String>,

    /// Chart master table (overrides the config file)
    #[arg(long, value_name = "FILE", env = "KAIDEN_MASTER")]
    pub master: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate an e-amusement play history export
    Aggregate {
        /// Play history CSV (UTF-8 or Shift_JIS)
        #[arg(long, value_name = "FILE")]
        csv: String,
        /// Only include charts of this level (1-12)
        #[arg(long)]
        level: Option<u8>,
        /// Output format
        #[arg(long, short, value_enum, default_value = "console")]
        format: OutputFormat,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Show how many playable charts the master table holds
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List unique chart titles
    Titles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Console,
    Tsv,
    Json,
}
