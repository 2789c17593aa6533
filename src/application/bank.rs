use super::ledger::Ledger;
use super::scheduler::Scheduler;
use super::transfers::TransferEngine;
use super::volume::VolumeIndex;
use crate::domain::Timestamp;
use crate::domain::transfer::{Transfer, TransferStatus};
use crate::error::Result;

/// The whole banking system as one aggregate.
///
/// `Bank` owns the ledger, the transfer engine and the scheduler, and is the
/// entry point for every operation. All time-dependent operations take the
/// caller's logical timestamp; nothing here reads a clock.
#[derive(Debug, Default, Clone)]
pub struct Bank {
    ledger: Ledger,
    transfers: TransferEngine,
    scheduler: Scheduler,
}

impl Bank {
    /// Creates an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_account(&mut self, account_id: &str) -> Result<()> {
        self.ledger.create_account(account_id)
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, account_id: &str, amount: i64, timestamp: Timestamp) -> Result<u64> {
        self.ledger.deposit(account_id, amount, timestamp)
    }

    /// Returns the new balance.
    pub fn withdraw(&mut self, account_id: &str, amount: i64, timestamp: Timestamp) -> Result<u64> {
        self.ledger.withdraw(account_id, amount, timestamp)
    }

    /// Spendable balance. Funds held for pending transfers are not included.
    pub fn balance(&self, account_id: &str) -> Result<u64> {
        self.ledger.balance(account_id)
    }

    /// Funds sent by `account_id` that are still held in escrow.
    ///
    /// A transfer past its deadline stays in this figure until its expiry is
    /// observed and the refund runs.
    pub fn escrowed_balance(&self, account_id: &str) -> Result<u64> {
        self.ledger.account(account_id)?;
        Ok(self.transfers.escrowed_by(account_id))
    }

    pub fn account_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn transaction_volume(&self, account_id: &str, timestamp: Timestamp) -> Result<u64> {
        self.volume_index().volume_up_to(account_id, timestamp)
    }

    pub fn top_accounts_by_volume(&self, n: usize, timestamp: Timestamp) -> Vec<String> {
        self.volume_index().top_n(n, timestamp)
    }

    pub fn transaction_history(
        &self,
        account_id: &str,
        timestamp: Timestamp,
    ) -> Result<Vec<String>> {
        self.volume_index().history_up_to(account_id, timestamp)
    }

    fn volume_index(&self) -> VolumeIndex<'_> {
        VolumeIndex::new(&self.ledger)
    }

    pub fn create_transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: i64,
        timestamp: Timestamp,
        ttl_ms: i64,
    ) -> Result<String> {
        self.transfers
            .create_transfer(&mut self.ledger, from, to, amount, timestamp, ttl_ms)
    }

    pub fn accept_transfer(&mut self, transfer_id: &str, timestamp: Timestamp) -> Result<()> {
        self.transfers
            .accept_transfer(&mut self.ledger, transfer_id, timestamp)
    }

    pub fn transfer_status(
        &mut self,
        transfer_id: &str,
        timestamp: Timestamp,
    ) -> Result<TransferStatus> {
        self.transfers
            .transfer_status(&mut self.ledger, transfer_id, timestamp)
    }

    pub fn transfer(&self, transfer_id: &str) -> Option<&Transfer> {
        self.transfers.get(transfer_id)
    }

    pub fn schedule_transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: i64,
        scheduled_for: Timestamp,
        ttl_ms: i64,
    ) -> Result<String> {
        self.scheduler
            .schedule_transfer(&self.ledger, from, to, amount, scheduled_for, ttl_ms)
    }

    pub fn process_scheduled_transfers(&mut self, current_time: Timestamp) -> Vec<String> {
        self.scheduler.process_scheduled_transfers(
            &mut self.transfers,
            &mut self.ledger,
            current_time,
        )
    }

    pub fn scheduled_transfer_ids(&self, account_id: &str) -> Result<Vec<String>> {
        self.scheduler
            .scheduled_transfer_ids(&self.ledger, account_id)
    }
}
