//! Account store - single source of truth for balances.
//!
//! Every account sits behind its own `Mutex`. The set of accounts is fixed
//! once the store is built, so the map itself needs no lock and an account
//! found by `slot` is guaranteed to still exist while it is locked.
//!
//! # Atomicity Guarantees
//!
//! `apply_transfer` holds both account locks while it debits, credits and
//! runs the commit callback. No reader can observe a state where only one
//! side of a transfer has been applied.
//!
//! # Lock Ordering
//!
//! When two distinct accounts are involved they are always locked in
//! ascending id order, so two transfers over the same pair in opposite
//! directions cannot deadlock.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::{
    error::AppError,
    models::account::{Account, AccountId},
};

/// Errors raised while building a store from its opening accounts.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("duplicate account id {0}")]
    DuplicateAccount(AccountId),

    #[error("account {0} has a negative opening balance")]
    NegativeBalance(AccountId),
}

#[derive(Debug)]
pub struct AccountStore {
    accounts: BTreeMap<AccountId, Mutex<Account>>,
}

impl AccountStore {
    /// Build a store from its opening accounts.
    ///
    /// # Errors
    ///
    /// - `DuplicateAccount`: two accounts share an id
    /// - `NegativeBalance`: an account opens below zero
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Result<Self, SeedError> {
        let mut map = BTreeMap::new();
        for account in accounts {
            if account.balance_cents < 0 {
                return Err(SeedError::NegativeBalance(account.id));
            }
            let id = account.id;
            if map.insert(id, Mutex::new(account)).is_some() {
                return Err(SeedError::DuplicateAccount(id));
            }
        }
        Ok(Self { accounts: map })
    }

    /// Number of accounts held.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Snapshot of a single account.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: no account with this id
    /// - `Internal`: the account lock is poisoned
    pub fn lookup(&self, id: AccountId) -> Result<Account, AppError> {
        let account = lock(id, self.slot(id)?)?;
        Ok(account.clone())
    }

    /// Snapshots of every account in ascending id order.
    ///
    /// Each account is read under its own lock; the result is not a
    /// consistent cut across accounts.
    pub fn accounts(&self) -> Result<Vec<Account>, AppError> {
        self.accounts
            .iter()
            .map(|(id, slot)| lock(*id, slot).map(|account| account.clone()))
            .collect()
    }

    /// Move `amount_cents` from one account to another.
    ///
    /// This is the only way balances change. `on_commit` receives the new
    /// source balance and runs after both balances are updated, while the
    /// locks are still held; its return value is passed through.
    ///
    /// A transfer from an account to itself locks that account once,
    /// checks the balance and leaves it unchanged.
    ///
    /// # Errors
    ///
    /// Nothing is mutated when an error is returned.
    ///
    /// - `InvalidAmount`: amount is zero or negative
    /// - `AccountNotFound`: source (checked first) or destination missing
    /// - `InsufficientFunds`: source balance below the amount
    /// - `Internal`: poisoned lock or credit overflow
    pub fn apply_transfer<T>(
        &self,
        from_id: AccountId,
        to_id: AccountId,
        amount_cents: i64,
        on_commit: impl FnOnce(i64) -> T,
    ) -> Result<T, AppError> {
        if amount_cents <= 0 {
            return Err(AppError::InvalidAmount(
                "The transfer amount must be greater than zero".to_string(),
            ));
        }

        let from_slot = self.slot(from_id)?;
        let to_slot = self.slot(to_id)?;

        if from_id == to_id {
            let account = lock(from_id, from_slot)?;
            ensure_funds(&account, amount_cents)?;
            return Ok(on_commit(account.balance_cents));
        }

        let (low, high) = if from_id < to_id {
            ((from_id, from_slot), (to_id, to_slot))
        } else {
            ((to_id, to_slot), (from_id, from_slot))
        };
        let mut low_guard = lock(low.0, low.1)?;
        let mut high_guard = lock(high.0, high.1)?;

        let (from, to) = if from_id < to_id {
            (&mut *low_guard, &mut *high_guard)
        } else {
            (&mut *high_guard, &mut *low_guard)
        };

        ensure_funds(from, amount_cents)?;
        let credited = to.balance_cents.checked_add(amount_cents).ok_or_else(|| {
            AppError::Internal(format!("balance overflow crediting account {to_id}"))
        })?;

        from.balance_cents -= amount_cents;
        to.balance_cents = credited;

        Ok(on_commit(from.balance_cents))
    }

    fn slot(&self, id: AccountId) -> Result<&Mutex<Account>, AppError> {
        self.accounts
            .get(&id)
            .ok_or(AppError::AccountNotFound { id })
    }
}

fn lock(id: AccountId, slot: &Mutex<Account>) -> Result<MutexGuard<'_, Account>, AppError> {
    slot.lock()
        .map_err(|_| AppError::Internal(format!("lock for account {id} is poisoned")))
}

fn ensure_funds(account: &Account, amount_cents: i64) -> Result<(), AppError> {
    if account.balance_cents < amount_cents {
        return Err(AppError::InsufficientFunds {
            current_balance_cents: account.balance_cents,
            requested_cents: amount_cents,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> AccountStore {
        AccountStore::new(Account::seed()).unwrap()
    }

    #[test]
    fn lookup_returns_snapshot() {
        let store = store();
        let account = store.lookup(1).unwrap();
        assert_eq!(account, Account::new(1, 1_000_000, "João Silva"));
        assert_eq!(store.lookup(99), Err(AppError::AccountNotFound { id: 99 }));
    }

    #[test]
    fn seeding_rejects_duplicates_and_negative_balances() {
        let duplicate = AccountStore::new([Account::new(1, 0, "a"), Account::new(1, 0, "b")]);
        assert_eq!(duplicate.unwrap_err(), SeedError::DuplicateAccount(1));

        let negative = AccountStore::new([Account::new(7, -1, "a")]);
        assert_eq!(negative.unwrap_err(), SeedError::NegativeBalance(7));
    }

    #[test]
    fn transfer_debits_and_credits_both_sides() {
        let store = store();
        let new_balance = store.apply_transfer(1, 2, 200_000, |balance| balance).unwrap();

        assert_eq!(new_balance, 800_000);
        assert_eq!(store.lookup(1).unwrap().balance_cents, 800_000);
        assert_eq!(store.lookup(2).unwrap().balance_cents, 700_000);
    }

    #[test]
    fn reverse_direction_uses_the_same_lock_order() {
        let store = store();
        let new_balance = store.apply_transfer(2, 1, 500_000, |balance| balance).unwrap();

        assert_eq!(new_balance, 0);
        assert_eq!(store.lookup(1).unwrap().balance_cents, 1_500_000);
    }

    #[test]
    fn missing_source_is_reported_before_missing_destination() {
        let store = store();
        assert_eq!(
            store.apply_transfer(98, 99, 1, |_| ()),
            Err(AppError::AccountNotFound { id: 98 })
        );
        assert_eq!(
            store.apply_transfer(1, 99, 1, |_| ()),
            Err(AppError::AccountNotFound { id: 99 })
        );
    }

    #[test]
    fn insufficient_funds_leaves_balances_untouched() {
        let store = store();
        let mut committed = false;
        let result = store.apply_transfer(1, 2, 2_000_000, |_| committed = true);

        assert_eq!(
            result,
            Err(AppError::InsufficientFunds {
                current_balance_cents: 1_000_000,
                requested_cents: 2_000_000
            })
        );
        assert!(!committed);
        assert_eq!(store.lookup(1).unwrap().balance_cents, 1_000_000);
        assert_eq!(store.lookup(2).unwrap().balance_cents, 500_000);
    }

    #[test]
    fn whole_balance_can_be_moved() {
        let store = store();
        store.apply_transfer(1, 2, 1_000_000, |_| ()).unwrap();
        assert_eq!(store.lookup(1).unwrap().balance_cents, 0);
        assert!(matches!(
            store.apply_transfer(1, 2, 1, |_| ()),
            Err(AppError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn self_transfer_keeps_balance_and_commits() {
        let store = store();
        let new_balance = store.apply_transfer(1, 1, 100, |balance| balance).unwrap();
        assert_eq!(new_balance, 1_000_000);

        assert!(matches!(
            store.apply_transfer(1, 1, 2_000_000, |_| ()),
            Err(AppError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn non_positive_amounts_are_refused() {
        let store = store();
        assert!(matches!(
            store.apply_transfer(1, 2, 0, |_| ()),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(matches!(
            store.apply_transfer(1, 2, -5, |_| ()),
            Err(AppError::InvalidAmount(_))
        ));
    }

    #[test]
    fn credit_overflow_is_an_internal_error() {
        let store =
            AccountStore::new([Account::new(1, 10, "a"), Account::new(2, i64::MAX, "b")]).unwrap();
        assert!(matches!(
            store.apply_transfer(1, 2, 10, |_| ()),
            Err(AppError::Internal(_))
        ));
        assert_eq!(store.lookup(1).unwrap().balance_cents, 10);
    }

    #[test]
    fn opposite_transfers_on_the_same_pair_do_not_deadlock_or_lose_updates() {
        let store = store();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..500 {
                        store.apply_transfer(1, 2, 1, |_| ()).unwrap();
                    }
                });
                scope.spawn(|| {
                    for _ in 0..500 {
                        store.apply_transfer(2, 1, 1, |_| ()).unwrap();
                    }
                });
            }
        });

        assert_eq!(store.lookup(1).unwrap().balance_cents, 1_000_000);
        assert_eq!(store.lookup(2).unwrap().balance_cents, 500_000);
    }

    #[test]
    fn concurrent_reads_never_see_half_applied_transfers() {
        let store = store();

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for _ in 0..1_000 {
                    store.apply_transfer(1, 2, 100, |_| ()).unwrap();
                }
            });
            scope.spawn(|| {
                for _ in 0..1_000 {
                    let balance = store.lookup(1).unwrap().balance_cents;
                    assert!((900_000..=1_000_000).contains(&balance));
                    assert_eq!(balance % 100, 0);
                }
            });
        });

        let total: i64 = store
            .accounts()
            .unwrap()
            .iter()
            .map(|account| account.balance_cents)
            .sum();
        assert_eq!(total, 1_500_000);
    }
}
