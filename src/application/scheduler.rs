use super::ledger::Ledger;
use super::transfers::TransferEngine;
use crate::domain::Timestamp;
use crate::domain::account::Amount;
use crate::domain::scheduled::{ScheduledTransfer, validate_schedule_time};
use crate::domain::transfer::validate_ttl;
use crate::error::{LedgerError, Result};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Holds transfers that should be created later and materializes them when
/// told to.
///
/// Jobs are kept in scheduling order and never removed; a job is consumed by
/// flipping its `processed` flag, which happens at most once.
#[derive(Debug, Default, Clone)]
pub struct Scheduler {
    jobs: Vec<ScheduledTransfer>,
    index: HashMap<String, usize>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a job. Only shape and account existence are checked; the
    /// sender's funds are checked when the job runs.
    pub fn schedule_transfer(
        &mut self,
        ledger: &Ledger,
        from: &str,
        to: &str,
        amount: i64,
        scheduled_for: Timestamp,
        ttl_ms: i64,
    ) -> Result<String> {
        if !ledger.contains(from) {
            return Err(LedgerError::account_not_found(from));
        }
        if !ledger.contains(to) {
            return Err(LedgerError::account_not_found(to));
        }
        let amount = Amount::new(amount)?;
        let scheduled_for = validate_schedule_time(scheduled_for)?;
        let ttl_ms = validate_ttl(ttl_ms)?;

        self.next_id += 1;
        let id = format!("scheduled{}", self.next_id);
        debug!(job = %id, from, to, %amount, scheduled_for, "transfer scheduled");
        self.index.insert(id.clone(), self.jobs.len());
        self.jobs.push(ScheduledTransfer::new(
            id.clone(),
            from,
            to,
            amount,
            scheduled_for,
            ttl_ms,
        ));
        Ok(id)
    }

    /// Runs every unprocessed job due at `now`, creating each transfer at
    /// `now` under the job's id.
    ///
    /// Returns the ids of the transfers that were created, in scheduling
    /// order. Jobs that fail are consumed and dropped.
    pub fn process_scheduled_transfers(
        &mut self,
        engine: &mut TransferEngine,
        ledger: &mut Ledger,
        now: Timestamp,
    ) -> Vec<String> {
        let mut created = Vec::new();
        let mut discarded = 0usize;

        for job in self.jobs.iter_mut().filter(|job| job.is_due(now)) {
            if !job.mark_processed() {
                continue;
            }
            match engine.open(
                ledger,
                job.id.clone(),
                &job.from,
                &job.to,
                job.amount,
                now,
                job.ttl_ms,
            ) {
                Ok(id) => created.push(id),
                Err(e) => {
                    discarded += 1;
                    warn!(job = %job.id, error = %e, "scheduled transfer discarded");
                }
            }
        }

        if !created.is_empty() || discarded > 0 {
            info!(
                now,
                created = created.len(),
                discarded,
                "processed scheduled transfers"
            );
        }
        created
    }

    /// Ids of the jobs `account_id` sends that have not run yet.
    pub fn scheduled_transfer_ids(&self, ledger: &Ledger, account_id: &str) -> Result<Vec<String>> {
        if !ledger.contains(account_id) {
            return Err(LedgerError::account_not_found(account_id));
        }
        Ok(self
            .jobs
            .iter()
            .filter(|job| !job.processed && job.from == account_id)
            .map(|job| job.id.clone())
            .collect())
    }

    pub fn get(&self, id: &str) -> Option<&ScheduledTransfer> {
        self.index.get(id).map(|&pos| &self.jobs[pos])
    }
}
