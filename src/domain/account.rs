use super::Timestamp;
use super::transaction::{Transaction, TransactionKind};
use crate::error::{LedgerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A strictly positive amount of money.
///
/// Callers hand amounts over as signed integers; anything that is not
/// strictly positive is rejected before it can reach a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(u64);

impl Amount {
    pub fn new(value: i64) -> Result<Self> {
        if value > 0 {
            Ok(Self(value as u64))
        } else {
            Err(LedgerError::InvalidArgument(format!(
                "Amount must be positive, got {value}"
            )))
        }
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Amount {
    type Error = LedgerError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer account: its spendable balance and the log of realized
/// money movements.
///
/// The balance and the log are deliberately separate. Funds held in escrow
/// for a pending transfer leave the balance without appearing in the log,
/// and only show up there once the transfer is accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// Caller-chosen identifier, never changes.
    pub id: String,
    /// Spendable funds, net of anything currently held in escrow.
    pub balance: u64,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            balance: 0,
            transactions: Vec::new(),
        }
    }

    /// Credits the balance and records a deposit.
    pub fn deposit(&mut self, amount: Amount, timestamp: Timestamp) -> Result<()> {
        self.release(amount)?;
        self.record(Transaction::new(TransactionKind::Deposit, amount, timestamp));
        Ok(())
    }

    /// Debits the balance and records a withdrawal, if funds allow.
    pub fn withdraw(&mut self, amount: Amount, timestamp: Timestamp) -> Result<()> {
        self.hold(amount)?;
        self.record(Transaction::new(
            TransactionKind::Withdrawal,
            amount,
            timestamp,
        ));
        Ok(())
    }

    /// Takes funds out of the balance without recording anything.
    pub fn hold(&mut self, amount: Amount) -> Result<()> {
        if self.balance >= amount.value() {
            self.balance -= amount.value();
            Ok(())
        } else {
            Err(LedgerError::InsufficientFunds {
                account: self.id.clone(),
                balance: self.balance,
                requested: amount.value(),
            })
        }
    }

    /// Puts funds back into the balance without recording anything.
    pub fn release(&mut self, amount: Amount) -> Result<()> {
        self.balance = self.credited_balance(amount)?;
        Ok(())
    }

    /// The balance a credit of `amount` would produce.
    pub fn credited_balance(&self, amount: Amount) -> Result<u64> {
        self.balance.checked_add(amount.value()).ok_or_else(|| {
            LedgerError::InvalidArgument(format!("Balance overflow on account {}", self.id))
        })
    }

    /// Appends to the log, keeping it sorted by timestamp.
    ///
    /// Entries with an equal timestamp keep their insertion order.
    pub fn record(&mut self, tx: Transaction) {
        let pos = self
            .transactions
            .partition_point(|t| t.timestamp <= tx.timestamp);
        self.transactions.insert(pos, tx);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The prefix of the log at or before `timestamp`.
    pub fn transactions_up_to(&self, timestamp: Timestamp) -> &[Transaction] {
        let end = self.transactions.partition_point(|t| t.timestamp <= timestamp);
        &self.transactions[..end]
    }
}
