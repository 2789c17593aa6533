use super::Timestamp;
use super::account::Amount;
use crate::error::{LedgerError, Result};
use serde::Serialize;

/// A transfer that will be created once its due time has been reached and
/// the scheduler is told to run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledTransfer {
    pub id: String,
    pub from: String,
    pub to: String,
    pub amount: Amount,
    pub scheduled_for: Timestamp,
    pub ttl_ms: u64,
    /// Flips to true on the first run that reaches `scheduled_for`, whether or
    /// not that run managed to create the transfer.
    pub processed: bool,
}

impl ScheduledTransfer {
    pub fn new(
        id: String,
        from: impl Into<String>,
        to: impl Into<String>,
        amount: Amount,
        scheduled_for: Timestamp,
        ttl_ms: u64,
    ) -> Self {
        Self {
            id,
            from: from.into(),
            to: to.into(),
            amount,
            scheduled_for,
            ttl_ms,
            processed: false,
        }
    }

    pub fn is_due(&self, now: Timestamp) -> bool {
        !self.processed && self.scheduled_for <= now
    }

    /// Marks the job consumed. Returns false if it already was.
    pub fn mark_processed(&mut self) -> bool {
        !std::mem::replace(&mut self.processed, true)
    }
}

/// Validates the due time of a scheduled transfer. Zero and negative
/// timestamps are rejected.
pub fn validate_schedule_time(scheduled_for: Timestamp) -> Result<Timestamp> {
    if scheduled_for > 0 {
        Ok(scheduled_for)
    } else {
        Err(LedgerError::InvalidArgument(format!(
            "Scheduled time must be positive, got {scheduled_for}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(scheduled_for: Timestamp) -> ScheduledTransfer {
        ScheduledTransfer::new(
            "scheduled1".to_string(),
            "alice",
            "bob",
            Amount::new(100).unwrap(),
            scheduled_for,
            1000,
        )
    }

    #[test]
    fn test_due_at_or_after_schedule() {
        let job = job(3000);
        assert!(!job.is_due(2999));
        assert!(job.is_due(3000));
        assert!(job.is_due(3500));
    }

    #[test]
    fn test_mark_processed_flips_once() {
        let mut job = job(3000);
        assert!(job.mark_processed());
        assert!(!job.mark_processed());
        assert!(!job.is_due(4000));
    }

    #[test]
    fn test_schedule_time_validation() {
        assert_eq!(validate_schedule_time(5000).unwrap(), 5000);
        assert!(validate_schedule_time(0).is_err());
        assert!(validate_schedule_time(-1).is_err());
    }
}
