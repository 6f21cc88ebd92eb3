use crate::models::PropertyRecord;
use crate::scrapers::types::SearchFilters;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all property sources.
/// The fetch pipeline tries sources in order until one yields results,
/// so a new source only has to implement this to join the chain.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch listings matching the given filters.
    async fn fetch(&self, filters: &SearchFilters) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the source, for logs.
    fn source_name(&self) -> &'static str;
}
