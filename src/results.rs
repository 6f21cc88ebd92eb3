use crate::models::PropertyRecord;
use serde::{Deserialize, Serialize};

/// Sort orders offered by the results view. Serialized names match the
/// sort dropdown values (`price-asc`, `sqft-desc`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    SqftAsc,
    SqftDesc,
    BedsAsc,
    BedsDesc,
    BathsAsc,
    BathsDesc,
}

/// Stable in-place sort by the given key. Ties keep their input order.
pub fn sort_records(records: &mut [PropertyRecord], key: SortKey) {
    match key {
        SortKey::PriceAsc => records.sort_by_key(|r| r.price),
        SortKey::PriceDesc => records.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::SqftAsc => records.sort_by_key(|r| r.square_footage),
        SortKey::SqftDesc => records.sort_by(|a, b| b.square_footage.cmp(&a.square_footage)),
        SortKey::BedsAsc => records.sort_by_key(|r| r.bedrooms),
        SortKey::BedsDesc => records.sort_by(|a, b| b.bedrooms.cmp(&a.bedrooms)),
        SortKey::BathsAsc => records.sort_by(|a, b| a.bathrooms.total_cmp(&b.bathrooms)),
        SortKey::BathsDesc => records.sort_by(|a, b| b.bathrooms.total_cmp(&a.bathrooms)),
    }
}

/// Case-insensitive address substring filter.
pub fn filter_by_address(records: &[PropertyRecord], term: &str) -> Vec<PropertyRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record.address.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// What the results area is showing. A search that came back empty is a
/// different state from never having searched at all.
#[derive(Debug, Clone, Default)]
pub enum SearchState {
    #[default]
    NotSearched,
    Loaded(Vec<PropertyRecord>),
}

impl SearchState {
    pub fn is_empty_result(&self) -> bool {
        matches!(self, SearchState::Loaded(records) if records.is_empty())
    }

    /// Headline for the results area; `None` before the first search.
    pub fn headline(&self) -> Option<String> {
        match self {
            SearchState::NotSearched => None,
            SearchState::Loaded(records) if records.is_empty() => {
                Some("No properties found".to_string())
            }
            SearchState::Loaded(records) => Some(format!(
                "Found {} properties matching your criteria",
                records.len()
            )),
        }
    }
}

/// The presenter: holds the loaded records plus the current sort key and
/// address search term, and produces the visible list on demand. Purely
/// derived; the loaded records are never mutated.
#[derive(Debug, Default)]
pub struct ResultsView {
    state: SearchState,
    pub sort_key: SortKey,
    pub search_term: String,
}

impl ResultsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh search supersedes whatever was loaded before.
    pub fn set_results(&mut self, records: Vec<PropertyRecord>) {
        self.state = SearchState::Loaded(records);
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Filter then sort. Returns a new list; the loaded order is kept.
    pub fn visible(&self) -> Vec<PropertyRecord> {
        let records = match &self.state {
            SearchState::NotSearched => return Vec::new(),
            SearchState::Loaded(records) => records,
        };
        let mut visible = filter_by_address(records, &self.search_term);
        sort_records(&mut visible, self.sort_key);
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PLACEHOLDER_IMAGE;
    use chrono::Utc;

    fn record(id: &str, address: &str, price: i64, sqft: u32, beds: u32, baths: f64) -> PropertyRecord {
        PropertyRecord {
            id: id.to_string(),
            address: address.to_string(),
            location: "Leavenworth, WA".to_string(),
            price,
            property_type: "Single Family".to_string(),
            bedrooms: beds,
            bathrooms: baths,
            square_footage: sqft,
            year_built: 2000,
            property_tax: price / 100,
            hoa_fee: 0,
            image_url: PLACEHOLDER_IMAGE.to_string(),
            listing_url: format!("https://example.com/{id}"),
            scraped_at: Utc::now(),
        }
    }

    fn sample() -> Vec<PropertyRecord> {
        vec![
            record("a", "123 Pine St", 450_000, 1_800, 3, 2.0),
            record("b", "456 Mountain View Dr", 389_000, 1_200, 2, 1.5),
            record("c", "789 River Rd", 499_000, 2_400, 4, 3.0),
        ]
    }

    fn ids(records: &[PropertyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn price_desc_reverses_price_asc_without_ties() {
        let mut asc = sample();
        sort_records(&mut asc, SortKey::PriceAsc);
        let mut desc = sample();
        sort_records(&mut desc, SortKey::PriceDesc);

        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
        assert_eq!(ids(&asc), vec!["b", "a", "c"]);
    }

    #[test]
    fn every_sort_key_orders_its_field() {
        let mut records = sample();

        sort_records(&mut records, SortKey::SqftAsc);
        assert_eq!(ids(&records), vec!["b", "a", "c"]);
        sort_records(&mut records, SortKey::SqftDesc);
        assert_eq!(ids(&records), vec!["c", "a", "b"]);
        sort_records(&mut records, SortKey::BedsAsc);
        assert_eq!(ids(&records), vec!["b", "a", "c"]);
        sort_records(&mut records, SortKey::BathsDesc);
        assert_eq!(ids(&records), vec!["c", "a", "b"]);
    }

    #[test]
    fn sort_is_stable_under_ties() {
        let mut records = vec![
            record("first", "1 A St", 400_000, 1_000, 2, 1.0),
            record("second", "2 B St", 400_000, 2_000, 3, 2.0),
            record("third", "3 C St", 300_000, 1_500, 2, 1.5),
        ];
        sort_records(&mut records, SortKey::PriceAsc);
        // Equal prices keep their input order.
        assert_eq!(ids(&records), vec!["third", "first", "second"]);
    }

    #[test]
    fn address_filter_is_case_insensitive() {
        let records = sample();
        let hits = filter_by_address(&records, "river");
        assert_eq!(ids(&hits), vec!["c"]);
        assert_eq!(filter_by_address(&records, "PINE").len(), 1);
        assert_eq!(filter_by_address(&records, "").len(), 3);
        assert!(filter_by_address(&records, "nowhere").is_empty());
    }

    #[test]
    fn sort_key_names_match_dropdown_values() {
        assert_eq!(
            serde_json::to_value(SortKey::PriceAsc).unwrap(),
            serde_json::json!("price-asc")
        );
        let key: SortKey = serde_json::from_str(r#""baths-desc""#).unwrap();
        assert_eq!(key, SortKey::BathsDesc);
    }

    #[test]
    fn empty_result_state_is_not_an_error_or_not_searched() {
        let mut view = ResultsView::new();
        assert!(view.state().headline().is_none());
        assert!(!view.state().is_empty_result());
        assert!(view.visible().is_empty());

        view.set_results(Vec::new());
        assert!(view.state().is_empty_result());
        assert_eq!(view.state().headline().as_deref(), Some("No properties found"));
    }

    #[test]
    fn view_filters_then_sorts_without_touching_loaded_order() {
        let mut view = ResultsView::new();
        view.set_results(sample());
        view.search_term = "st".to_string();
        view.sort_key = SortKey::PriceDesc;

        // "St" matches Pine St only; "Dr" and "Rd" drop out.
        assert_eq!(ids(&view.visible()), vec!["a"]);
        assert_eq!(
            view.state().headline().as_deref(),
            Some("Found 3 properties matching your criteria")
        );
    }
}
