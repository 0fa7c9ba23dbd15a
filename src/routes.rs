//! HTTP router and shared handler state.

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{handlers, services::transfer_service::TransferService};

/// State shared with every handler via `State` extraction.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: TransferService,
}

impl AppState {
    pub fn new(service: TransferService) -> Self {
        Self { service }
    }
}

/// Build the application router.
///
/// # Routes
///
/// - `POST /api/transfer`
/// - `GET /api/accounts/{id}/balance`
/// - `GET /health`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/transfer", post(handlers::transfers::create_transfer))
        .route(
            "/api/accounts/{id}/balance",
            get(handlers::accounts::get_balance),
        )
        // Request/response tracing for observability
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
