pub mod error;
pub mod routes;

use crate::scrapers::{FetchPipeline, SavedSearch};
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

/// Shared, read-only state behind the router.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<FetchPipeline>,
    /// First saved search, applied when a request sets `savedSearches`.
    pub default_search: Option<SavedSearch>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/properties", post(routes::search_properties))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyRecord;
    use crate::scrapers::{CatalogSource, PropertyType, SavedSearch};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_router(default_search: Option<SavedSearch>) -> Router {
        let pipeline = FetchPipeline::new(vec![Box::new(CatalogSource::new())], Duration::ZERO);
        router(AppState {
            pipeline: Arc::new(pipeline),
            default_search,
        })
    }

    fn search_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/properties")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn records_from(response: axum::response::Response) -> Vec<PropertyRecord> {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn search_returns_matching_records() {
        let response = test_router(None)
            .oneshot(search_request(r#"{"propertyType":"condo"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let records = records_from(response).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].property_type, "Condo");
    }

    #[tokio::test]
    async fn no_matches_is_still_a_success() {
        let response = test_router(None)
            .oneshot(search_request(
                r#"{"propertyType":"all","minPrice":9000000}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(records_from(response).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_reports_generic_failure() {
        let response = test_router(None)
            .oneshot(search_request("{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload["error"], "Failed to fetch properties");
    }

    #[tokio::test]
    async fn saved_search_applies_when_flagged() {
        let saved = SavedSearch {
            id: "1".to_string(),
            name: "Big houses".to_string(),
            location: "Leavenworth, WA".to_string(),
            property_type: PropertyType::SingleFamily,
            min_price: 0,
            max_price: 0,
            min_beds: 4,
            min_baths: 0.0,
        };

        let response = test_router(Some(saved))
            .oneshot(search_request(
                r#"{"propertyType":"all","savedSearches":true}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let records = records_from(response).await;
        // Only the four-bedroom catalog entry clears the saved floor.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].bedrooms, 4);
    }

    #[tokio::test]
    async fn saved_search_ignored_without_flag() {
        let saved = SavedSearch {
            id: "1".to_string(),
            name: "Big houses".to_string(),
            location: "Leavenworth, WA".to_string(),
            property_type: PropertyType::SingleFamily,
            min_price: 0,
            max_price: 0,
            min_beds: 4,
            min_baths: 0.0,
        };

        let response = test_router(Some(saved))
            .oneshot(search_request(r#"{"propertyType":"all"}"#))
            .await
            .unwrap();

        assert_eq!(records_from(response).await.len(), 6);
    }
}
