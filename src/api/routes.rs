use crate::api::error::{ApiError, ApiJson};
use crate::api::AppState;
use crate::models::PropertyRecord;
use crate::scrapers::SearchFilters;
use axum::extract::State;
use axum::Json;
use tracing::info;

/// `POST /api/properties`: run the fetch pipeline for the posted filters.
///
/// Always 200 with a (possibly empty) array; the pipeline absorbs source
/// failures. Only a malformed body reaches the error path.
pub async fn search_properties(
    State(state): State<AppState>,
    ApiJson(mut filters): ApiJson<SearchFilters>,
) -> Result<Json<Vec<PropertyRecord>>, ApiError> {
    if filters.saved_searches {
        if let Some(saved) = &state.default_search {
            filters.apply_saved(saved);
        }
    }

    info!(
        location = filters.location_or_default(),
        "Searching properties"
    );

    let records = state.pipeline.fetch(&filters).await;

    info!(count = records.len(), "Search finished");

    Ok(Json(records))
}
