//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::AppError, routes::AppState};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of accounts held by the store
    pub accounts: usize,

    /// Number of completed transactions recorded so far
    pub transactions: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// Reads every account so a poisoned account lock surfaces as a 500.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "accounts": 2,
///   "transactions": 0,
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let accounts = state.service.accounts().accounts()?.len();

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        accounts,
        transactions: state.service.transactions().len(),
        timestamp: Utc::now(),
    }))
}
