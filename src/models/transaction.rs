//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: immutable record of a completed transfer
//! - `TransferRequest`: request body for the transfer endpoint
//! - `TransferReceipt` / `TransferResponse`: result of a successful transfer

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{models::account::AccountId, money};

/// Description recorded when the client does not provide one.
pub const DEFAULT_DESCRIPTION: &str = "Transfer between accounts";

/// Transaction status.
///
/// Only completed transfers are ever recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
}

/// Represents a transaction record in the transaction log.
///
/// Created once the balance mutation is committed and never modified
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier for this transaction
    pub id: Uuid,

    /// Source account (debited)
    pub from_account_id: AccountId,

    /// Destination account (credited)
    pub to_account_id: AccountId,

    /// Amount moved in cents, always positive
    pub amount_cents: i64,

    pub description: String,

    /// When the transfer completed
    pub timestamp: DateTime<Utc>,

    pub status: TransactionStatus,
}

impl Transaction {
    /// Build a completed transaction with a fresh id and the current time.
    pub fn completed(
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount_cents: i64,
        description: Option<&str>,
    ) -> Self {
        let description = description
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION);

        Self {
            id: Uuid::new_v4(),
            from_account_id,
            to_account_id,
            amount_cents,
            description: description.to_string(),
            timestamp: Utc::now(),
            status: TransactionStatus::Completed,
        }
    }
}

/// Request to transfer money between accounts.
///
/// # JSON Example
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
/// Every field is optional at the serde layer so that missing values are
/// reported as `IncompleteData` by the transfer service rather than as a
/// JSON parse failure. `amount` stays a raw JSON value until
/// `money::parse_amount` validates it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account_id: Option<AccountId>,

    pub to_account_id: Option<AccountId>,

    #[serde(default, deserialize_with = "deserialize_present")]
    pub amount: Option<serde_json::Value>,

    pub description: Option<String>,
}

/// Keep an explicit `null` as `None` while preserving any other value as-is.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok((!value.is_null()).then_some(value))
}

/// Outcome of a successful transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub transaction_id: Uuid,

    /// Source account balance after the transfer, in cents
    pub new_balance_cents: i64,

    pub timestamp: DateTime<Utc>,
}

/// Response body for `POST /api/transfer`.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": true,
///   "message": "Transfer completed successfully",
///   "transactionId": "770e8400-e29b-41d4-a716-446655440002",
///   "newBalance": 8000.0,
///   "timestamp": "2025-12-21T16:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub success: bool,
    pub message: String,
    pub transaction_id: Uuid,

    /// Source account balance in major units
    #[serde(with = "rust_decimal::serde::float")]
    pub new_balance: Decimal,

    pub timestamp: DateTime<Utc>,
}

impl From<TransferReceipt> for TransferResponse {
    fn from(receipt: TransferReceipt) -> Self {
        Self {
            success: true,
            message: "Transfer completed successfully".to_string(),
            transaction_id: receipt.transaction_id,
            new_balance: money::to_decimal(receipt.new_balance_cents),
            timestamp: receipt.timestamp,
        }
    }
}
