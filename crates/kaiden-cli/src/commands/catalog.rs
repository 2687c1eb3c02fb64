//! Catalog command for summarizing the master table.

use anyhow::{Context, Result};
use kaiden_core::{Analyzer, FileSource};

pub fn run(analyzer: &Analyzer<FileSource>, json: bool) -> Result<()> {
    let summary = analyzer
        .catalog_summary()
        .context("Failed to load master table")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Playable SP charts: {}", summary.total_charts);
    for (level, count) in summary.level_counts.iter().rev() {
        println!("  Lv.{:<2} {:>5}", level, count);
    }
    Ok(())
}
