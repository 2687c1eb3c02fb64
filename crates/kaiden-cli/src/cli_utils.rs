//! Shared helpers for CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kaiden_core::{Analyzer, Config, FileSource};
use tracing::{debug, warn};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "kaiden.toml";

/// Load the config and build an analyzer over the master table.
///
/// An explicit config path must exist; a missing default config falls back
/// to built-in defaults.
pub fn build_analyzer(
    config: Option<&str>,
    master: Option<&str>,
) -> Result<Analyzer<FileSource>> {
    let mut config = load_config(config)?;
    if let Some(master) = master {
        config.master_path = PathBuf::from(master);
    }
    debug!("Master table: {}", config.master_path.display());

    Ok(Analyzer::from_config(config))
}

fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load(path).with_context(|| format!("Failed to load config: {}", path))
        }
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Config::load(DEFAULT_CONFIG_FILE)
            .with_context(|| format!("Failed to load config: {}", DEFAULT_CONFIG_FILE)),
        None => {
            warn!("{} not found, using default settings", DEFAULT_CONFIG_FILE);
            Ok(Config::default())
        }
    }
}

/// Write to the output file, or stdout when none is given
pub fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content).with_context(|| format!("Failed to write: {}", path))?;
            eprintln!("Exported to: {}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}
