use crate::config::Config;
use crate::models::PropertyRecord;
use crate::scrapers::catalog::CatalogSource;
use crate::scrapers::rapidapi::RapidApiSource;
use crate::scrapers::traits::PropertySource;
use crate::scrapers::types::SearchFilters;
use crate::scrapers::zillow::ZillowScraper;
use anyhow::Result;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Ordered chain of property sources. Each tier runs only when every
/// tier before it produced nothing; a tier failure is logged and treated
/// as zero results, so the chain itself never fails.
pub struct FetchPipeline {
    sources: Vec<Box<dyn PropertySource>>,
    response_delay: Duration,
}

impl FetchPipeline {
    pub fn new(sources: Vec<Box<dyn PropertySource>>, response_delay: Duration) -> Self {
        Self {
            sources,
            response_delay,
        }
    }

    /// The standard three-tier chain: direct scrape, then the keyed API
    /// when a key is configured, then the sample catalog.
    pub fn standard(config: &Config) -> Result<Self> {
        let mut sources: Vec<Box<dyn PropertySource>> = vec![Box::new(ZillowScraper::new()?)];
        if let Some(api_key) = &config.rapidapi_key {
            sources.push(Box::new(RapidApiSource::new(api_key.clone())?));
        } else {
            debug!("No search API key configured, skipping that tier");
        }
        sources.push(Box::new(CatalogSource::new()));

        Ok(Self::new(sources, config.response_delay))
    }

    pub fn tier_count(&self) -> usize {
        self.sources.len()
    }

    /// Run the chain. Always returns a list, possibly empty.
    ///
    /// The configured delay is applied before returning regardless of
    /// which tier produced the data, so the UI's loading state behaves
    /// the same for every tier.
    pub async fn fetch(&self, filters: &SearchFilters) -> Vec<PropertyRecord> {
        let mut records = Vec::new();

        for source in &self.sources {
            match source.fetch(filters).await {
                Ok(found) if !found.is_empty() => {
                    info!(
                        source = source.source_name(),
                        count = found.len(),
                        "Tier produced results"
                    );
                    records = found;
                    break;
                }
                Ok(_) => {
                    debug!(
                        source = source.source_name(),
                        "Tier returned no results, trying next"
                    );
                }
                Err(error) => {
                    warn!(
                        source = source.source_name(),
                        %error,
                        "Tier failed, trying next"
                    );
                }
            }
        }

        tokio::time::sleep(self.response_delay).await;

        records
    }
}
