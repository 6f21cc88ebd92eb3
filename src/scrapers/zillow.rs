use crate::models::{estimated_annual_tax, PropertyRecord, PLACEHOLDER_IMAGE};
use crate::scrapers::traits::PropertySource;
use crate::scrapers::types::SearchFilters;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION, REFERER,
    UPGRADE_INSECURE_REQUESTS,
};
use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const SEARCH_BASE: &str = "https://www.zillow.com/homes/";
const SITE_ROOT: &str = "https://www.zillow.com";

static BEDS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s+bd").unwrap());
static BATHS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s+ba").unwrap());
static SQFT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([\d,]+)\s+sqft").unwrap());

/// Direct scraper for the Zillow search results page.
///
/// Coupled to the site's current card markup; when the structure changes
/// this source yields nothing and the pipeline moves on to the next tier.
pub struct ZillowScraper {
    client: Client,
}

impl ZillowScraper {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.zillow.com/"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36")
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Build the search URL: location plus the optional price, beds, baths
    /// and type path segments the site understands.
    fn build_search_url(&self, filters: &SearchFilters) -> Result<Url> {
        let mut url = Url::parse(SEARCH_BASE).context("Invalid search base URL")?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow::anyhow!("Search base URL cannot hold path segments"))?;
            segments.pop_if_empty();
            segments.push(&format!("{}_rb", filters.location_or_default()));

            if let (Some(min), Some(max)) = (filters.price_floor(), filters.price_ceiling()) {
                segments.push(&format!("{min}-{max}_price"));
            }
            if let Some(beds) = filters.beds_floor() {
                segments.push(&format!("{beds}-_beds"));
            }
            if let Some(baths) = filters.baths_floor() {
                segments.push(&format!("{baths}-_baths"));
            }
            if let Some(kind) = filters.property_type.scrape_segment() {
                segments.push(&format!("{kind}_type"));
            }
            segments.push("");
        }
        Ok(url)
    }

    /// Parse property cards out of a search results page.
    /// Split out for unit tests.
    fn parse_search_results(&self, html: &str, location: &str) -> Vec<PropertyRecord> {
        let document = Html::parse_document(html);
        let card_selector = Selector::parse(r#"article[data-test="property-card"]"#).unwrap();
        let addr_selector = Selector::parse(r#"[data-test="property-card-addr"]"#).unwrap();
        let price_selector = Selector::parse(r#"[data-test="property-card-price"]"#).unwrap();
        let details_selector = Selector::parse(r#"[data-test="property-card-details"]"#).unwrap();
        let type_selector = Selector::parse(r#"[data-test="property-card-home-type"]"#).unwrap();
        let img_selector = Selector::parse("img").unwrap();
        let link_selector = Selector::parse("a[href]").unwrap();

        let mut properties = Vec::new();

        for (index, card) in document.select(&card_selector).enumerate() {
            let address = card
                .select(&addr_selector)
                .next()
                .map(|el| el.text().collect::<String>().trim().to_string())
                .unwrap_or_default();

            let price = card
                .select(&price_selector)
                .next()
                .map(|el| parse_price(&el.text().collect::<String>()))
                .unwrap_or(0);

            let details = card
                .select(&details_selector)
                .next()
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default();
            let (bedrooms, bathrooms, square_footage) = parse_details(&details);

            let image_url = card
                .select(&img_selector)
                .next()
                .and_then(|el| el.value().attr("src"))
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string();

            let listing_href = card
                .select(&link_selector)
                .next()
                .and_then(|el| el.value().attr("href"))
                .unwrap_or_default();
            let listing_url = if listing_href.starts_with("http") {
                listing_href.to_string()
            } else {
                format!("{SITE_ROOT}{listing_href}")
            };

            let property_type = card
                .select(&type_selector)
                .next()
                .map(|el| el.text().collect::<String>().trim().to_string())
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| "Single Family".to_string());

            debug!("Parsed card {}: {} ({} USD)", index, address, price);

            properties.push(PropertyRecord {
                id: format!("property-{index}"),
                address,
                location: location.to_string(),
                price,
                property_type,
                bedrooms,
                bathrooms,
                square_footage,
                // Not available in search results
                year_built: 0,
                property_tax: estimated_annual_tax(price),
                hoa_fee: 0,
                image_url,
                listing_url,
                scraped_at: Utc::now(),
            });
        }

        properties
    }
}

#[async_trait]
impl PropertySource for ZillowScraper {
    async fn fetch(&self, filters: &SearchFilters) -> Result<Vec<PropertyRecord>> {
        let url = self.build_search_url(filters)?;
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch search page")?;

        if !response.status().is_success() {
            warn!("Search page returned status: {}", response.status());
            anyhow::bail!("Failed to fetch search page: {}", response.status());
        }

        let html = response.text().await.context("Failed to read response body")?;
        debug!("Downloaded {} bytes of HTML", html.len());

        let properties = self.parse_search_results(&html, filters.location_or_default());

        if properties.is_empty() {
            warn!("No property cards matched in page markup");
        } else {
            info!("✅ Scraped {} properties from search page", properties.len());
        }

        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "zillow"
    }
}

/// Strip everything but digits and parse, `$450,000` -> 450000.
fn parse_price(text: &str) -> i64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Pull beds, baths and sqft out of a card's details text,
/// e.g. `3 bd 2.5 ba 1,800 sqft`. Missing pieces come back as 0.
fn parse_details(details: &str) -> (u32, f64, u32) {
    let bedrooms = BEDS_RE
        .captures(details)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0);
    let bathrooms = BATHS_RE
        .captures(details)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0.0);
    let square_footage = SQFT_RE
        .captures(details)
        .and_then(|caps| caps[1].replace(',', "").parse().ok())
        .unwrap_or(0);
    (bedrooms, bathrooms, square_footage)
}
