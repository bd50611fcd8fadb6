//! API route definitions.

use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::AppState;
use presage_shared::AppError;

pub mod forecast;
pub mod health;
pub mod quotation;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(forecast::routes())
        .merge(quotation::routes())
}

/// Fallback handler for unmatched paths.
pub(crate) async fn not_found(uri: Uri) -> Response {
    error_response(&AppError::NotFound(uri.path().to_string()))
}

/// Maps an `AppError` to its JSON error response.
pub(crate) fn error_response(error: &AppError) -> Response {
    let status = StatusCode::from_u16(error.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": error.error_code(),
            "message": error.to_string(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_fallback() {
        let response = not_found(Uri::from_static("/api/v1/missing")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_response_status_mapping() {
        let response = error_response(&AppError::Validation("bad".to_string()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = error_response(&AppError::NotFound("/nope".to_string()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
