use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("malformed search request: `{0}`")]
    InvalidRequest(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Search request failed: {}", self);

        // The browser only distinguishes success from failure, so every
        // failure surfaces as the same generic payload.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(ErrorResponse {
                error: "Failed to fetch properties".to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `axum::Json` wrapper whose rejection is an [`ApiError`], so malformed
/// bodies produce the same error payload as everything else.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T> IntoResponse for ApiJson<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
