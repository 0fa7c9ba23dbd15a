//! In-memory storage for accounts and completed transactions.
//!
//! - `accounts`: account balances with per-account locking
//! - `ledger`: append-only transaction log

pub mod accounts;
pub mod ledger;

pub use accounts::{AccountStore, SeedError};
pub use ledger::TransactionLog;
