//! Account data models and API response types.
//!
//! This module defines:
//! - `Account`: in-memory record owned by the account store
//! - `AccountBalance`: result of a balance read
//! - `BalanceResponse`: response body returned to clients

use rust_decimal::Decimal;
use serde::Serialize;

use crate::money;

/// Account identifier as sent by clients.
pub type AccountId = u64;

/// Represents an account held by the account store.
///
/// # Balance Storage
///
/// Balances are stored as `i64` cents to avoid floating-point precision issues.
///
/// For example:
/// - 10.50 is stored as 1050 cents
/// - 10000.00 is stored as 1000000 cents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique identifier for this account
    pub id: AccountId,

    /// Current balance in cents
    ///
    /// Never negative: every debit is checked against it under lock.
    pub balance_cents: i64,

    /// Display name of the account holder
    pub owner: String,
}

impl Account {
    pub fn new(id: AccountId, balance_cents: i64, owner: impl Into<String>) -> Self {
        Self {
            id,
            balance_cents,
            owner: owner.into(),
        }
    }

    /// Accounts loaded at startup.
    pub fn seed() -> Vec<Account> {
        vec![
            Account::new(1, 1_000_000, "João Silva"),
            Account::new(2, 500_000, "Maria Santos"),
        ]
    }
}

/// Balance snapshot returned by `TransferService::get_balance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBalance {
    pub account_id: AccountId,
    pub balance_cents: i64,
    pub owner: String,
}

impl From<Account> for AccountBalance {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.id,
            balance_cents: account.balance_cents,
            owner: account.owner,
        }
    }
}

/// Response body for `GET /api/accounts/{id}/balance`.
///
/// # JSON Example
///
/// ```json
/// {
///   "accountId": 1,
///   "balance": 8000.0,
///   "owner": "João Silva"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub account_id: AccountId,

    /// Balance in major units
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,

    pub owner: String,
}

impl From<AccountBalance> for BalanceResponse {
    fn from(balance: AccountBalance) -> Self {
        Self {
            account_id: balance.account_id,
            balance: money::to_decimal(balance.balance_cents),
            owner: balance.owner,
        }
    }
}
