//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::models::account::AccountId;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error label.
///
/// # Error Categories
///
/// - **Validation Errors**: missing fields, bad amounts, malformed requests
/// - **Resource Errors**: referenced account does not exist
/// - **Business Logic Errors**: the transfer would overdraw the source
/// - **Internal Errors**: storage in an unexpected state
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// One of `fromAccountId`, `toAccountId` or `amount` is missing or null.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("fromAccountId, toAccountId and amount are required")]
    IncompleteData,

    /// Amount is not a positive number with at most two decimal places.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    InvalidAmount(String),

    /// Request body or path could not be parsed at all.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    InvalidRequest(String),

    /// No account exists with the given id.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account {id} does not exist")]
    AccountNotFound { id: AccountId },

    /// Source account balance is lower than the requested amount.
    ///
    /// Returns HTTP 400 Bad Request. Both values are in cents.
    #[error(
        "Current balance: {}, requested: {}",
        major(.current_balance_cents),
        major(.requested_cents)
    )]
    InsufficientFunds {
        current_balance_cents: i64,
        requested_cents: i64,
    },

    /// Unexpected internal failure (e.g. a poisoned account lock).
    ///
    /// Returns HTTP 500. The detail is logged but never sent to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

fn major(cents: &i64) -> rust_decimal::Decimal {
    crate::money::to_decimal(*cents)
}

impl AppError {
    /// Short human-readable label used as the `error` field of the response body.
    pub fn label(&self) -> &'static str {
        match self {
            AppError::IncompleteData => "Incomplete data",
            AppError::InvalidAmount(_) => "Invalid amount",
            AppError::InvalidRequest(_) => "Invalid request",
            AppError::AccountNotFound { .. } => "Account not found",
            AppError::InsufficientFunds { .. } => "Insufficient funds",
            AppError::Internal(_) => "Internal server error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::IncompleteData
            | AppError::InvalidAmount(_)
            | AppError::InvalidRequest(_)
            | AppError::InsufficientFunds { .. } => StatusCode::BAD_REQUEST,
            AppError::AccountNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": "Insufficient funds",
///   "message": "Current balance: 10000, requested: 20000"
/// }
/// ```
///
/// `Internal` errors hide their detail behind a generic message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::Internal(ref detail) => {
                tracing::error!(%detail, "internal error while handling request");
                "An internal error occurred".to_string()
            }
            ref other => other.to_string(),
        };

        let body = Json(json!({
            "error": self.label(),
            "message": message
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(AppError::IncompleteData.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidAmount("negative".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::AccountNotFound { id: 99 }.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InsufficientFunds {
                current_balance_cents: 1_000_000,
                requested_cents: 2_000_000
            }
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn insufficient_funds_message_uses_major_units() {
        let err = AppError::InsufficientFunds {
            current_balance_cents: 1_000_000,
            requested_cents: 2_000_050,
        };
        assert_eq!(err.to_string(), "Current balance: 10000, requested: 20000.5");
    }

    #[test]
    fn not_found_names_the_account() {
        assert_eq!(
            AppError::AccountNotFound { id: 99 }.to_string(),
            "Account 99 does not exist"
        );
    }
}
