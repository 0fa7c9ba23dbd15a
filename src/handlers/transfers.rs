//! Transfer HTTP handler.
//!
//! - POST /api/transfer - Move money between two accounts

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    models::transaction::{TransferRequest, TransferResponse},
    routes::AppState,
};

/// Transfer money between accounts.
///
/// # Request Body
///
/// ```json
/// {
///   "fromAccountId": 1,
///   "toAccountId": 2,
///   "amount": 2000,
///   "description": "Rent"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: transaction id, new source balance, timestamp
/// - **Error (400)**: incomplete data, invalid amount, insufficient funds,
///   malformed JSON
/// - **Error (404)**: source or destination account not found
/// - **Error (500)**: unexpected internal failure
///
/// # Atomicity
///
/// Both balances and the transaction record are committed together or not
/// at all.
pub async fn create_transfer(
    State(state): State<AppState>,
    payload: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<Json<TransferResponse>, AppError> {
    let Json(request) = payload?;

    let receipt = state.service.transfer(&request)?;

    Ok(Json(receipt.into()))
}
