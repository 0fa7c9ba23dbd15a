//! Data models for accounts, transactions and their wire representations.

/// Account record and balance response
pub mod account;
/// Transaction record, transfer request and response
pub mod transaction;
