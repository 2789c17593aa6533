use crate::domain::Timestamp;
use crate::domain::account::{Account, Amount};
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::error::{LedgerError, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Owns every account, its balance and its realized transaction log.
///
/// Two families of primitives live here. `deposit`/`withdraw` move the
/// balance and record a transaction. `hold`/`release` only move the balance;
/// `settle` only records. Escrow is built from the second family so that
/// pending and expired transfers never show up in volume or history.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    accounts: BTreeMap<String, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_account(&mut self, id: &str) -> Result<()> {
        if self.accounts.contains_key(id) {
            return Err(LedgerError::AccountExists(id.to_string()));
        }
        self.accounts.insert(id.to_string(), Account::new(id));
        debug!(account = id, "account created");
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    pub fn account(&self, id: &str) -> Result<&Account> {
        self.accounts
            .get(id)
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    fn account_mut(&mut self, id: &str) -> Result<&mut Account> {
        self.accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    /// Accounts in ascending id order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Recorded credit. Returns the new balance.
    pub fn deposit(&mut self, id: &str, amount: i64, timestamp: Timestamp) -> Result<u64> {
        let account = self.account_mut(id)?;
        let amount = Amount::new(amount)?;
        account.deposit(amount, timestamp)?;
        debug!(account = id, %amount, timestamp, balance = account.balance, "deposit");
        Ok(account.balance)
    }

    /// Recorded debit. Returns the new balance.
    pub fn withdraw(&mut self, id: &str, amount: i64, timestamp: Timestamp) -> Result<u64> {
        let account = self.account_mut(id)?;
        let amount = Amount::new(amount)?;
        account.withdraw(amount, timestamp)?;
        debug!(account = id, %amount, timestamp, balance = account.balance, "withdrawal");
        Ok(account.balance)
    }

    /// Balance-only debit.
    pub fn hold(&mut self, id: &str, amount: Amount) -> Result<()> {
        self.account_mut(id)?.hold(amount)
    }

    /// Balance-only credit.
    pub fn release(&mut self, id: &str, amount: Amount) -> Result<()> {
        self.account_mut(id)?.release(amount)
    }

    /// Completes a transfer whose amount was already held from `from`.
    ///
    /// Credits `to` and records the movement on both sides at `at`. Every
    /// check runs before anything is mutated.
    pub fn settle(&mut self, from: &str, to: &str, amount: Amount, at: Timestamp) -> Result<()> {
        self.account(from)?;
        let credited = self.account(to)?.credited_balance(amount)?;

        let recipient = self.account_mut(to)?;
        recipient.balance = credited;
        recipient.record(Transaction::new(TransactionKind::Deposit, amount, at));
        self.account_mut(from)?.record(Transaction::new(
            TransactionKind::Withdrawal,
            amount,
            at,
        ));
        Ok(())
    }

    pub fn balance(&self, id: &str) -> Result<u64> {
        Ok(self.account(id)?.balance)
    }

    pub fn transactions_up_to(&self, id: &str, timestamp: Timestamp) -> Result<&[Transaction]> {
        Ok(self.account(id)?.transactions_up_to(timestamp))
    }
}
