//! Master table source abstraction.
//!
//! The analyzer reads the master table through this trait, so tests and
//! embedders can supply the table without touching the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::parse::decode_text;

/// Trait for reading the raw chart master table.
pub trait MasterSource {
    /// Read the whole table as text.
    fn read_master(&self) -> Result<String>;
}

/// Master table stored in a file (UTF-8 or Shift_JIS)
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl MasterSource for FileSource {
    fn read_master(&self) -> Result<String> {
        let bytes = fs::read(&self.path)?;
        decode_text(&bytes)
    }
}

/// Master table already held in memory
#[derive(Debug, Clone)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl MasterSource for InlineSource {
    fn read_master(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
