//! Application layer: the components that operate on the domain entities.
//!
//! `Ledger` owns accounts, `VolumeIndex` reads the ledger for reporting,
//! `TransferEngine` runs the escrow state machine on top of the ledger, and
//! `Scheduler` feeds due jobs into the engine. `Bank` ties them together into
//! the single aggregate callers talk to.

pub mod bank;
pub mod ledger;
pub mod scheduler;
pub mod transfers;
pub mod volume;
