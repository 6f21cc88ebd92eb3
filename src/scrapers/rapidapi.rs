use crate::models::{estimated_annual_tax, PropertyRecord, PLACEHOLDER_IMAGE};
use crate::scrapers::traits::PropertySource;
use crate::scrapers::types::SearchFilters;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

const SEARCH_ENDPOINT: &str = "https://zillow-com1.p.rapidapi.com/propertyExtendedSearch";
const API_HOST: &str = "zillow-com1.p.rapidapi.com";

/// Keyed third-party search API, used when the direct scrape comes back
/// empty and a key is configured.
pub struct RapidApiSource {
    client: Client,
    api_key: String,
}

/// Wire shape of the search endpoint. Every field is optional; the
/// mapping below substitutes defaults for whatever is missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiListing {
    zpid: Option<String>,
    address: Option<String>,
    price: Option<i64>,
    home_type: Option<String>,
    bedrooms: Option<u32>,
    bathrooms: Option<f64>,
    living_area: Option<u32>,
    year_built: Option<u32>,
    img_src: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    props: Vec<ApiListing>,
}

impl RapidApiSource {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, api_key })
    }
}

#[async_trait]
impl PropertySource for RapidApiSource {
    async fn fetch(&self, filters: &SearchFilters) -> Result<Vec<PropertyRecord>> {
        let location = filters.location_or_default();
        let query = [
            ("location", location.to_string()),
            ("home_type", filters.property_type.api_home_type().to_string()),
            ("price_min", filters.price_floor().unwrap_or(0).to_string()),
            (
                "price_max",
                filters.price_ceiling().unwrap_or(10_000_000).to_string(),
            ),
            ("beds_min", filters.beds_floor().unwrap_or(0).to_string()),
            (
                "baths_min",
                filters
                    .baths_floor()
                    .map(|baths| baths.to_string())
                    .unwrap_or_else(|| "0".to_string()),
            ),
        ];

        debug!("Querying search API for {}", location);

        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&query)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", API_HOST)
            .send()
            .await
            .context("Failed to reach search API")?;

        if !response.status().is_success() {
            anyhow::bail!("Search API returned status: {}", response.status());
        }

        let body: SearchResponse = response
            .json()
            .await
            .context("Failed to decode search API response")?;

        info!("Search API returned {} listings", body.props.len());

        Ok(body
            .props
            .iter()
            .enumerate()
            .map(|(index, listing)| map_listing(listing, index, location))
            .collect())
    }

    fn source_name(&self) -> &'static str {
        "rapidapi"
    }
}

/// Map an API listing into a record, substituting defaults for absent
/// fields. The listing URL is synthesized from the listing id.
fn map_listing(listing: &ApiListing, index: usize, location: &str) -> PropertyRecord {
    let id = listing
        .zpid
        .clone()
        .unwrap_or_else(|| format!("property-{index}"));
    let price = listing.price.unwrap_or(0);

    PropertyRecord {
        listing_url: format!("https://www.zillow.com/homedetails/{id}_zpid/"),
        id,
        address: listing
            .address
            .clone()
            .unwrap_or_else(|| "Unknown Address".to_string()),
        location: location.to_string(),
        price,
        property_type: listing
            .home_type
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        bedrooms: listing.bedrooms.unwrap_or(0),
        bathrooms: listing.bathrooms.unwrap_or(0.0),
        square_footage: listing.living_area.unwrap_or(0),
        year_built: listing.year_built.unwrap_or(0),
        property_tax: estimated_annual_tax(price),
        // Not available from this source
        hoa_fee: 0,
        image_url: listing
            .img_src
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        scraped_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_full_listing() {
        let body: SearchResponse = serde_json::from_str(
            r#"{
                "props": [{
                    "zpid": "48749425",
                    "address": "101 Alpine Way, Leavenworth, WA 98826",
                    "price": 425000,
                    "homeType": "Townhouse",
                    "bedrooms": 3,
                    "bathrooms": 2.5,
                    "livingArea": 1650,
                    "yearBuilt": 2015,
                    "imgSrc": "https://photos.example.com/alpine.jpg"
                }]
            }"#,
        )
        .unwrap();

        let record = map_listing(&body.props[0], 0, "Leavenworth, WA");
        assert_eq!(record.id, "48749425");
        assert_eq!(record.address, "101 Alpine Way, Leavenworth, WA 98826");
        assert_eq!(record.price, 425_000);
        assert_eq!(record.property_type, "Townhouse");
        assert_eq!(record.bedrooms, 3);
        assert_eq!(record.bathrooms, 2.5);
        assert_eq!(record.square_footage, 1_650);
        assert_eq!(record.year_built, 2015);
        assert_eq!(record.property_tax, 4_250);
        assert_eq!(record.hoa_fee, 0);
        assert_eq!(record.image_url, "https://photos.example.com/alpine.jpg");
        assert_eq!(
            record.listing_url,
            "https://www.zillow.com/homedetails/48749425_zpid/"
        );
    }

    #[test]
    fn absent_fields_take_documented_defaults() {
        let listing = ApiListing::default();
        let record = map_listing(&listing, 4, "Leavenworth, WA");

        assert_eq!(record.id, "property-4");
        assert_eq!(record.address, "Unknown Address");
        assert_eq!(record.property_type, "Unknown");
        assert_eq!(record.price, 0);
        assert_eq!(record.bedrooms, 0);
        assert_eq!(record.bathrooms, 0.0);
        assert_eq!(record.square_footage, 0);
        assert_eq!(record.year_built, 0);
        assert_eq!(record.property_tax, 0);
        assert_eq!(record.hoa_fee, 0);
        assert_eq!(record.image_url, PLACEHOLDER_IMAGE);
        assert_eq!(
            record.listing_url,
            "https://www.zillow.com/homedetails/property-4_zpid/"
        );
    }

    #[test]
    fn missing_props_array_is_empty() {
        let body: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(body.props.is_empty());
    }
}
