//! Transfer service - Core business logic for moving funds.
//!
//! This service handles:
//! - Request validation in a fixed fail-fast order
//! - Atomic two-account balance updates via `AccountStore`
//! - Recording completed transfers in the `TransactionLog`
//!
//! # Validation Order
//!
//! 1. `fromAccountId`, `toAccountId` and `amount` present → `IncompleteData`
//! 2. amount is a positive number with at most two decimals → `InvalidAmount`
//! 3. source account exists → `AccountNotFound`
//! 4. destination account exists → `AccountNotFound`
//! 5. source balance covers the amount → `InsufficientFunds`
//!
//! Steps 3-5 are checked by the store under lock, so a concurrent transfer
//! can never invalidate them between the check and the mutation.

use std::sync::Arc;

use crate::{
    error::AppError,
    models::{
        account::{AccountBalance, AccountId},
        transaction::{Transaction, TransferReceipt, TransferRequest},
    },
    money,
    store::{AccountStore, TransactionLog},
};

#[derive(Debug, Clone)]
pub struct TransferService {
    accounts: Arc<AccountStore>,
    transactions: Arc<TransactionLog>,
}

impl TransferService {
    pub fn new(accounts: Arc<AccountStore>, transactions: Arc<TransactionLog>) -> Self {
        Self {
            accounts,
            transactions,
        }
    }

    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    pub fn transactions(&self) -> &TransactionLog {
        &self.transactions
    }

    /// Execute a transfer.
    ///
    /// # Process
    ///
    /// 1. Validate the request shape and amount
    /// 2. Lock both accounts and check the source balance
    /// 3. Debit and credit
    /// 4. Record the transaction while the accounts are still locked
    ///
    /// A transfer from an account to itself is accepted: the balance is
    /// unchanged and a transaction is still recorded.
    ///
    /// # Errors
    ///
    /// No balance changes and no transaction is recorded on any error.
    pub fn transfer(&self, request: &TransferRequest) -> Result<TransferReceipt, AppError> {
        let result = self.try_transfer(request);

        match &result {
            Ok(receipt) => tracing::info!(
                transaction_id = %receipt.transaction_id,
                from = ?request.from_account_id,
                to = ?request.to_account_id,
                new_balance_cents = receipt.new_balance_cents,
                "transfer completed"
            ),
            // reported once, when the error is rendered into a response
            Err(AppError::Internal(_)) => {}
            Err(err) => tracing::warn!(
                from = ?request.from_account_id,
                to = ?request.to_account_id,
                error = %err,
                "transfer rejected"
            ),
        }

        result
    }

    fn try_transfer(&self, request: &TransferRequest) -> Result<TransferReceipt, AppError> {
        let (Some(from_id), Some(to_id), Some(amount)) = (
            request.from_account_id,
            request.to_account_id,
            request.amount.as_ref(),
        ) else {
            return Err(AppError::IncompleteData);
        };

        let amount_cents = money::parse_amount(amount)?;
        let description = request.description.as_deref();

        self.accounts
            .apply_transfer(from_id, to_id, amount_cents, |new_balance_cents| {
                let transaction =
                    Transaction::completed(from_id, to_id, amount_cents, description);
                let receipt = TransferReceipt {
                    transaction_id: transaction.id,
                    new_balance_cents,
                    timestamp: transaction.timestamp,
                };
                self.transactions.append(transaction);
                receipt
            })
    }

    /// Current balance and owner of an account.
    pub fn get_balance(&self, account_id: AccountId) -> Result<AccountBalance, AppError> {
        self.accounts.lookup(account_id).map(AccountBalance::from)
    }
}
