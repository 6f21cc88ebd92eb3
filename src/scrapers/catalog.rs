use crate::models::{PropertyRecord, PLACEHOLDER_IMAGE};
use crate::scrapers::traits::PropertySource;
use crate::scrapers::types::SearchFilters;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

/// Last-resort source: a fixed catalog of example listings, so the UI
/// always has something to render when both live tiers come up empty.
pub struct CatalogSource;

impl CatalogSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertySource for CatalogSource {
    async fn fetch(&self, filters: &SearchFilters) -> Result<Vec<PropertyRecord>> {
        info!("📋 Falling back to the built-in sample catalog");

        // The live tiers are trusted to have filtered server-side; the
        // catalog was never filtered upstream, so apply the same
        // predicates here.
        Ok(sample_listings()
            .into_iter()
            .filter(|record| filters.matches(record))
            .collect())
    }

    fn source_name(&self) -> &'static str {
        "catalog"
    }
}

/// Six example listings around the default search location.
fn sample_listings() -> Vec<PropertyRecord> {
    let scraped_at = Utc::now();
    let listing = |id: &str,
                   address: &str,
                   price: i64,
                   property_type: &str,
                   bedrooms: u32,
                   bathrooms: f64,
                   square_footage: u32,
                   year_built: u32,
                   property_tax: i64,
                   hoa_fee: i64,
                   slug: &str| PropertyRecord {
        id: id.to_string(),
        address: address.to_string(),
        location: "Leavenworth, WA".to_string(),
        price,
        property_type: property_type.to_string(),
        bedrooms,
        bathrooms,
        square_footage,
        year_built,
        property_tax,
        hoa_fee,
        image_url: PLACEHOLDER_IMAGE.to_string(),
        listing_url: format!("https://www.zillow.com/homedetails/{slug}"),
        scraped_at,
    };

    vec![
        listing(
            "1",
            "123 Pine St, Leavenworth, WA 98826",
            450_000,
            "Single Family",
            3,
            2.0,
            1_800,
            2005,
            3_600,
            0,
            "123-fake-st",
        ),
        listing(
            "2",
            "456 Mountain View Dr, Leavenworth, WA 98826",
            389_000,
            "Single Family",
            2,
            1.5,
            1_200,
            1995,
            2_800,
            0,
            "456-fake-st",
        ),
        listing(
            "3",
            "789 River Rd, Leavenworth, WA 98826",
            499_000,
            "Single Family",
            4,
            3.0,
            2_400,
            2010,
            4_200,
            0,
            "789-fake-st",
        ),
        listing(
            "4",
            "101 Alpine Way, Leavenworth, WA 98826",
            425_000,
            "Townhouse",
            3,
            2.5,
            1_650,
            2015,
            3_400,
            250,
            "101-fake-st",
        ),
        listing(
            "5",
            "202 Cascade Ave, Leavenworth, WA 98826",
            349_000,
            "Condo",
            2,
            2.0,
            1_100,
            2008,
            2_600,
            350,
            "202-fake-st",
        ),
        listing(
            "6",
            "303 Icicle Rd, Leavenworth, WA 98826",
            475_000,
            "Single Family",
            3,
            2.0,
            1_950,
            2000,
            3_800,
            0,
            "303-fake-st",
        ),
    ]
}
