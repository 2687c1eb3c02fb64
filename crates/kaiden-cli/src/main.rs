mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("kaiden=warn,kaiden_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let analyzer = cli_utils::build_analyzer(args.config.as_deref(), args.master.as_deref())?;

    match args.command {
        Command::Aggregate {
            csv,
            level,
            format,
            output,
        } => commands::aggregate::run(&analyzer, &csv, level, format, output.as_deref()),
        Command::Catalog { json } => commands::catalog::run(&analyzer, json),
        Command::Titles => commands::titles::run(&analyzer),
    }
}
