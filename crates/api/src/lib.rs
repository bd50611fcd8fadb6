//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for forecasting and quotations
//! - Request/response DTOs with presentation rounding
//! - Document export endpoints

pub mod routes;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use presage_shared::EmailService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Email service for sending quotations.
    pub email_service: Arc<EmailService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
