use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default BPI exponent.
pub const DEFAULT_BPI_COEFFICIENT: f64 = 1.1;

/// Default floor applied to single-chart BPI before the overall power mean.
pub const DEFAULT_MIN_BPI: f64 = -15.0;

/// BPI tuning parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BpiConfig {
    pub coefficient: f64,
    pub min_bpi: f64,
}

impl Default for BpiConfig {
    fn default() -> Self {
        Self {
            coefficient: DEFAULT_BPI_COEFFICIENT,
            min_bpi: DEFAULT_MIN_BPI,
        }
    }
}

/// Analyzer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the chart master table
    pub master_path: PathBuf,
    pub bpi: BpiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            master_path: PathBuf::from("master_songs.csv"),
            bpi: BpiConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML content. Missing keys fall back to defaults.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
