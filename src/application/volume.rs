use super::ledger::Ledger;
use crate::domain::Timestamp;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use std::cmp::Reverse;

/// Point-in-time reporting over the ledger's realized transaction logs.
///
/// Holds no state of its own; every answer is recomputed from the log.
pub struct VolumeIndex<'a> {
    ledger: &'a Ledger,
}

impl<'a> VolumeIndex<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Sum of deposit and withdrawal amounts at or before `timestamp`.
    pub fn volume_up_to(&self, account_id: &str, timestamp: Timestamp) -> Result<u64> {
        let transactions = self.ledger.transactions_up_to(account_id, timestamp)?;
        Ok(sum_volume(transactions))
    }

    /// Up to `n` account ids by volume, highest first. Equal volumes are
    /// ordered by ascending id.
    pub fn top_n(&self, n: usize, timestamp: Timestamp) -> Vec<String> {
        let mut ranked: Vec<(u64, &str)> = self
            .ledger
            .accounts()
            .map(|account| {
                (
                    sum_volume(account.transactions_up_to(timestamp)),
                    account.id.as_str(),
                )
            })
            .collect();
        // Accounts come out of the ledger in id order, so a stable sort on
        // volume alone keeps the id tie-break.
        ranked.sort_by_key(|&(volume, _)| Reverse(volume));
        ranked
            .into_iter()
            .take(n)
            .map(|(_, id)| id.to_string())
            .collect()
    }

    pub fn history_up_to(&self, account_id: &str, timestamp: Timestamp) -> Result<Vec<String>> {
        let transactions = self.ledger.transactions_up_to(account_id, timestamp)?;
        Ok(transactions.iter().map(ToString::to_string).collect())
    }
}

fn sum_volume(transactions: &[Transaction]) -> u64 {
    transactions
        .iter()
        .fold(0u64, |acc, tx| acc.saturating_add(tx.amount.value()))
}
