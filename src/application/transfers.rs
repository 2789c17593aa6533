use super::ledger::Ledger;
use crate::domain::Timestamp;
use crate::domain::account::Amount;
use crate::domain::transfer::{Transfer, TransferStatus, validate_ttl};
use crate::error::{LedgerError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Drives transfers through `Pending -> Accepted | Expired`.
///
/// Creation holds the amount out of the sender's balance. Acceptance settles
/// it into the recipient's balance and records both legs at the creation
/// time. Expiry gives it back to the sender the first time it is observed by
/// `accept_transfer` or `transfer_status`, and never again.
#[derive(Debug, Default, Clone)]
pub struct TransferEngine {
    transfers: HashMap<String, Transfer>,
    next_id: u64,
}

impl TransferEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_transfer(
        &mut self,
        ledger: &mut Ledger,
        from: &str,
        to: &str,
        amount: i64,
        timestamp: Timestamp,
        ttl_ms: i64,
    ) -> Result<String> {
        let amount = Amount::new(amount)?;
        let ttl_ms = validate_ttl(ttl_ms)?;
        let id = format!("transfer{}", self.next_id + 1);
        let id = self.open(ledger, id, from, to, amount, timestamp, ttl_ms)?;
        self.next_id += 1;
        Ok(id)
    }

    /// Opens a transfer under a caller-chosen id. Arguments must already be
    /// validated; account existence and funds are checked here.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn open(
        &mut self,
        ledger: &mut Ledger,
        id: String,
        from: &str,
        to: &str,
        amount: Amount,
        timestamp: Timestamp,
        ttl_ms: u64,
    ) -> Result<String> {
        if !ledger.contains(from) {
            return Err(LedgerError::account_not_found(from));
        }
        if !ledger.contains(to) {
            return Err(LedgerError::account_not_found(to));
        }
        if self.transfers.contains_key(&id) {
            return Err(LedgerError::InvalidArgument(format!(
                "Transfer id already in use: {id}"
            )));
        }
        ledger.hold(from, amount)?;

        let transfer = Transfer::new(id.clone(), from, to, amount, timestamp, ttl_ms);
        debug!(
            transfer = %id,
            from,
            to,
            %amount,
            created_at = timestamp,
            expires_at = transfer.expires_at(),
            "transfer pending"
        );
        self.transfers.insert(id.clone(), transfer);
        Ok(id)
    }

    pub fn accept_transfer(
        &mut self,
        ledger: &mut Ledger,
        id: &str,
        timestamp: Timestamp,
    ) -> Result<()> {
        let transfer = self
            .transfers
            .get_mut(id)
            .ok_or_else(|| LedgerError::transfer_not_found(id))?;

        if !transfer.is_escrowed() {
            return Err(LedgerError::AlreadyFinalized(id.to_string()));
        }
        if timestamp >= transfer.expires_at() {
            refund(ledger, transfer)?;
            return Err(LedgerError::AlreadyFinalized(id.to_string()));
        }

        ledger.settle(
            &transfer.from,
            &transfer.to,
            transfer.amount,
            transfer.created_at,
        )?;
        transfer.accepted_at = Some(timestamp);
        debug!(transfer = id, accepted_at = timestamp, "transfer accepted");
        Ok(())
    }

    /// Resolves the status at `timestamp`, running the expiry refund if this
    /// is the first time the transfer is seen past its deadline.
    pub fn transfer_status(
        &mut self,
        ledger: &mut Ledger,
        id: &str,
        timestamp: Timestamp,
    ) -> Result<TransferStatus> {
        let transfer = self
            .transfers
            .get_mut(id)
            .ok_or_else(|| LedgerError::transfer_not_found(id))?;

        let status = transfer.status_at(timestamp);
        if status == TransferStatus::Expired && transfer.is_escrowed() {
            refund(ledger, transfer)?;
        }
        Ok(status)
    }

    pub fn get(&self, id: &str) -> Option<&Transfer> {
        self.transfers.get(id)
    }

    /// Total still held in escrow for transfers sent by `account_id`.
    pub fn escrowed_by(&self, account_id: &str) -> u64 {
        self.transfers
            .values()
            .filter(|t| t.from == account_id && t.is_escrowed())
            .map(|t| t.amount.value())
            .sum()
    }
}

fn refund(ledger: &mut Ledger, transfer: &mut Transfer) -> Result<()> {
    ledger.release(&transfer.from, transfer.amount)?;
    transfer.refunded = true;
    debug!(
        transfer = %transfer.id,
        account = %transfer.from,
        amount = %transfer.amount,
        "transfer expired, escrow refunded"
    );
    Ok(())
}
