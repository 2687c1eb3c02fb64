use std::sync::OnceLock;

use tracing::info;

use crate::chart::{MasterChart, load_catalog};
use crate::error::Result;

/// Load-once cache of the chart master table.
///
/// The first successful `get_or_load` parses the raw table; later calls return
/// the cached rows without invoking the loader. There is no invalidation.
#[derive(Debug, Default)]
pub struct MasterCatalog {
    charts: OnceLock<Vec<MasterChart>>,
}

impl MasterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached catalog, loading it with `loader` on first access.
    ///
    /// A failing loader leaves the cache empty so a later call can retry.
    pub fn get_or_load<F>(&self, loader: F) -> Result<&[MasterChart]>
    where
        F: FnOnce() -> Result<String>,
    {
        if let Some(charts) = self.charts.get() {
            return Ok(charts);
        }

        let raw = loader()?;
        let charts = load_catalog(&raw);
        info!("Loaded {} master charts", charts.len());

        // A concurrent caller may have won the race; both results are identical.
        Ok(self.charts.get_or_init(move || charts))
    }

    pub fn is_loaded(&self) -> bool {
        self.charts.get().is_some()
    }
}
