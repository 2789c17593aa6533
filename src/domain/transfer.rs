//! Escrowed transfer state.
//!
//! A transfer is `Pending` from creation until it is either accepted or its
//! time-to-live runs out. Both outcomes are terminal. Status is derived from
//! the caller's timestamp, except for the two facts that must stick once they
//! happen: the acceptance time and the execution of the expiry refund.

use super::Timestamp;
use super::account::Amount;
use crate::error::{LedgerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Pending,
    Accepted,
    Expired,
}

impl TransferStatus {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransferStatus::Accepted | TransferStatus::Expired)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "pending",
            TransferStatus::Accepted => "accepted",
            TransferStatus::Expired => "expired",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates a caller-supplied time-to-live.
pub fn validate_ttl(ttl_ms: i64) -> Result<u64> {
    u64::try_from(ttl_ms).map_err(|_| {
        LedgerError::InvalidArgument(format!("TTL must be non-negative, got {ttl_ms}"))
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transfer {
    pub id: String,
    pub from: String,
    pub to: String,
    /// Already taken out of the sender's balance at creation.
    pub amount: Amount,
    pub created_at: Timestamp,
    pub ttl_ms: u64,
    /// Set once, when the recipient accepts. Pins the status to `Accepted`.
    pub accepted_at: Option<Timestamp>,
    /// Set once, when the escrow goes back to the sender after expiry.
    pub refunded: bool,
}

impl Transfer {
    pub fn new(
        id: String,
        from: impl Into<String>,
        to: impl Into<String>,
        amount: Amount,
        created_at: Timestamp,
        ttl_ms: u64,
    ) -> Self {
        Self {
            id,
            from: from.into(),
            to: to.into(),
            amount,
            created_at,
            ttl_ms,
            accepted_at: None,
            refunded: false,
        }
    }

    pub fn expires_at(&self) -> Timestamp {
        self.created_at.saturating_add_unsigned(self.ttl_ms)
    }

    /// Status as seen at `timestamp`, without side effects.
    ///
    /// An expired transfer whose refund has not run yet already reports
    /// `Expired` here; the refund itself is the engine's job.
    pub fn status_at(&self, timestamp: Timestamp) -> TransferStatus {
        if self.accepted_at.is_some() {
            TransferStatus::Accepted
        } else if self.refunded || timestamp >= self.expires_at() {
            TransferStatus::Expired
        } else {
            TransferStatus::Pending
        }
    }

    /// Whether the escrowed amount is still out of every balance.
    pub fn is_escrowed(&self) -> bool {
        self.accepted_at.is_none() && !self.refunded
    }
}
