//! Account HTTP handlers.
//!
//! - GET /api/accounts/{id}/balance - Current balance and owner

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    error::AppError,
    models::account::{AccountId, BalanceResponse},
    routes::AppState,
};

/// Get the balance of an account.
///
/// # Response
///
/// - **Success (200 OK)**: account id, balance in major units and owner
/// - **Error (404)**: no account with this id
/// - **Error (400)**: id is not a non-negative integer
///
/// ```json
/// {
///   "accountId": 2,
///   "balance": 7000.0,
///   "owner": "Maria Santos"
/// }
/// ```
pub async fn get_balance(
    State(state): State<AppState>,
    path: Result<Path<AccountId>, PathRejection>,
) -> Result<Json<BalanceResponse>, AppError> {
    let Path(account_id) = path?;

    let balance = state.service.get_balance(account_id)?;

    Ok(Json(balance.into()))
}
