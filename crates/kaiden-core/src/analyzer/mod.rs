//! Request/response boundary over the aggregation pipeline.

mod api;
mod source;

pub use api::*;
pub use source::*;

use tracing::{debug, warn};

use crate::aggregate::aggregate;
use crate::chart::{
    MasterCatalog, MasterChart, TargetChart, filter_playable_sp_charts, list_unique_titles,
};
use crate::config::Config;
use crate::error::{Error, Result};

/// Main analyzer: owns the configuration, the master source and its cache
pub struct Analyzer<S: MasterSource> {
    config: Config,
    source: S,
    catalog: MasterCatalog,
}

impl Analyzer<FileSource> {
    /// Analyzer reading the master table from `config.master_path`
    pub fn from_config(config: Config) -> Self {
        let source = FileSource::new(&config.master_path);
        Self::new(config, source)
    }
}

impl<S: MasterSource> Analyzer<S> {
    pub fn new(config: Config, source: S) -> Self {
        Self {
            config,
            source,
            catalog: MasterCatalog::new(),
        }
    }

    /// Full master table, read from the source on first use
    pub fn master_charts(&self) -> Result<&[MasterChart]> {
        self.catalog.get_or_load(|| self.source.read_master())
    }

    /// Playable SP charts in catalog order
    pub fn target_charts(&self) -> Result<Vec<TargetChart>> {
        Ok(filter_playable_sp_charts(self.master_charts()?))
    }

    /// Aggregate the request's history export.
    ///
    /// Results come back sorted by score rate, unscored charts last.
    pub fn aggregate(&self, request: &AggregateRequest) -> Result<AggregateResponse> {
        if request.csv.trim().is_empty() {
            return Err(Error::format("csv is required"));
        }

        let mut charts = self.target_charts()?;
        if let Some(level) = request.effective_level() {
            charts.retain(|c| c.level == level);
            debug!("Level filter {}: {} charts", level, charts.len());
        }

        let aggregation = aggregate(&charts, &request.csv, &self.config.bpi)?;
        let mut results = aggregation.results;
        sort_results(&mut results);

        Ok(AggregateResponse {
            results,
            summary: aggregation.summary,
        })
    }

    /// Like [`Analyzer::aggregate`], with failures folded into the payload
    pub fn handle(&self, request: &AggregateRequest) -> ApiResponse {
        match self.aggregate(request) {
            Ok(response) => ApiResponse::Ok(response),
            Err(e) => {
                warn!("Aggregation failed: {}", e);
                ApiResponse::Error(ErrorPayload {
                    error: e.to_string(),
                })
            }
        }
    }

    pub fn catalog_summary(&self) -> Result<CatalogSummary> {
        Ok(CatalogSummary::from_charts(&self.target_charts()?))
    }

    pub fn unique_titles(&self) -> Result<Vec<String>> {
        Ok(list_unique_titles(&self.target_charts()?))
    }
}
