use anyhow::{Context, Result};
use kaiden_core::{Analyzer, FileSource};

/// Print every unique title, one per line
pub fn run(analyzer: &Analyzer<FileSource>) -> Result<()> {
    let titles = analyzer
        .unique_titles()
        .context("Failed to load master table")?;
    for title in &titles {
        println!("{}", title);
    }
    eprintln!("{} titles", titles.len());
    Ok(())
}
