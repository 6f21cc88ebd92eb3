use crate::models::PropertyRecord;
use serde::{Deserialize, Serialize};

/// Location assumed when a search arrives without one.
pub const DEFAULT_LOCATION: &str = "Leavenworth, WA";

/// Property-type filter values offered by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    All,
    #[default]
    SingleFamily,
    MultiFamily,
    Condo,
    Townhouse,
    Land,
}

impl PropertyType {
    pub fn is_all(&self) -> bool {
        matches!(self, PropertyType::All)
    }

    /// Kebab token used in request bodies and for substring matching
    /// against a record's type label.
    pub fn query_token(&self) -> &'static str {
        match self {
            PropertyType::All => "all",
            PropertyType::SingleFamily => "single-family",
            PropertyType::MultiFamily => "multi-family",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Land => "land",
        }
    }

    /// Path segment understood by the scraped site, `None` for `All`.
    pub fn scrape_segment(&self) -> Option<&'static str> {
        match self {
            PropertyType::All => None,
            PropertyType::SingleFamily => Some("house"),
            PropertyType::MultiFamily => Some("multi-family"),
            PropertyType::Condo => Some("condo"),
            PropertyType::Townhouse => Some("townhouse"),
            PropertyType::Land => Some("land"),
        }
    }

    /// `home_type` parameter for the keyed search API.
    pub fn api_home_type(&self) -> &'static str {
        match self {
            PropertyType::All => "Houses",
            other => other.query_token(),
        }
    }
}

/// Search criteria posted by the filter form. Built per request and
/// discarded once the response is produced.
///
/// Zero and absent are both "unset" for the numeric bounds, matching how
/// the form serializes untouched fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub location: String,
    pub property_type: PropertyType,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_beds: Option<u32>,
    pub min_baths: Option<f64>,
    /// When set, unset fields are filled from the first saved search.
    pub saved_searches: bool,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            property_type: PropertyType::default(),
            min_price: None,
            max_price: None,
            min_beds: None,
            min_baths: None,
            saved_searches: false,
        }
    }
}

impl SearchFilters {
    pub fn location_or_default(&self) -> &str {
        let trimmed = self.location.trim();
        if trimmed.is_empty() {
            DEFAULT_LOCATION
        } else {
            trimmed
        }
    }

    pub fn price_floor(&self) -> Option<i64> {
        self.min_price.filter(|price| *price > 0)
    }

    pub fn price_ceiling(&self) -> Option<i64> {
        self.max_price.filter(|price| *price > 0)
    }

    pub fn beds_floor(&self) -> Option<u32> {
        self.min_beds.filter(|beds| *beds > 0)
    }

    pub fn baths_floor(&self) -> Option<f64> {
        self.min_baths.filter(|baths| *baths > 0.0)
    }

    /// The predicates a real source is expected to apply server-side.
    /// Only the sample catalog needs them locally, since it was never
    /// filtered upstream.
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        if let Some(min) = self.price_floor() {
            if record.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_ceiling() {
            if record.price > max {
                return false;
            }
        }
        if let Some(beds) = self.beds_floor() {
            if record.bedrooms < beds {
                return false;
            }
        }
        if let Some(baths) = self.baths_floor() {
            if record.bathrooms < baths {
                return false;
            }
        }
        if !self.property_type.is_all()
            && !record
                .property_type
                .to_lowercase()
                .contains(self.property_type.query_token())
        {
            return false;
        }
        true
    }

    /// Fill unset fields from a saved search. Fields the caller already
    /// set are left alone.
    pub fn apply_saved(&mut self, saved: &SavedSearch) {
        if self.location.trim().is_empty() {
            self.location = saved.location.clone();
        }
        if self.price_floor().is_none() && saved.min_price > 0 {
            self.min_price = Some(saved.min_price);
        }
        if self.price_ceiling().is_none() && saved.max_price > 0 {
            self.max_price = Some(saved.max_price);
        }
        if self.beds_floor().is_none() && saved.min_beds > 0 {
            self.min_beds = Some(saved.min_beds);
        }
        if self.baths_floor().is_none() && saved.min_baths > 0.0 {
            self.min_baths = Some(saved.min_baths);
        }
    }
}

/// A named filter set from the settings page, read once at startup and
/// never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    pub id: String,
    pub name: String,
    pub location: String,
    pub property_type: PropertyType,
    pub min_price: i64,
    pub max_price: i64,
    pub min_beds: u32,
    pub min_baths: f64,
}
