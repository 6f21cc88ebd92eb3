use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image reference used when a source has no photo for a listing.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=600";

/// One normalized listing, regardless of which source produced it.
///
/// Built fresh for every search response and never mutated afterwards.
/// Field names serialize in camelCase to match the browser contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub address: String,
    pub location: String,
    pub price: i64,
    pub property_type: String,
    pub bedrooms: u32,
    /// Half-bath granularity, e.g. 2.5.
    pub bathrooms: f64,
    pub square_footage: u32,
    /// 0 when the source does not expose it.
    pub year_built: u32,
    /// Annual figure, dollars.
    pub property_tax: i64,
    /// Monthly figure, dollars. 0 when none applies.
    pub hoa_fee: i64,
    pub image_url: String,
    pub listing_url: String,
    pub scraped_at: DateTime<Utc>,
}

/// Annual tax estimate for sources that expose no tax figure: 1% of price.
pub fn estimated_annual_tax(price: i64) -> i64 {
    (price as f64 * 0.01).round() as i64
}
