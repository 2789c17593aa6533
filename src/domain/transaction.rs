use super::Timestamp;
use super::account::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A realized money movement on one account.
///
/// Accepted transfers show up as one of these on each side; pending and
/// expired transfers never do.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub timestamp: Timestamp,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: Amount, timestamp: Timestamp) -> Self {
        Self {
            kind,
            amount,
            timestamp,
        }
    }
}

/// Renders as `<kind> <amount> <timestamp>`, the history line format.
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.amount, self.timestamp)
    }
}
