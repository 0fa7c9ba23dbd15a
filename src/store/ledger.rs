//! Append-only log of completed transactions.

use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::models::transaction::Transaction;

/// Completed transactions in the order they were committed.
///
/// Records are only ever pushed, so a lock poisoned by a panicking thread
/// still guards a well-formed `Vec` and is recovered rather than reported.
#[derive(Debug, Default)]
pub struct TransactionLog {
    entries: Mutex<Vec<Transaction>>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, transaction: Transaction) {
        self.entries().push(transaction);
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Copy of every record in completion order.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.entries().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Transaction> {
        self.entries().iter().find(|tx| tx.id == id).cloned()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Transaction>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
