//! Domain entities of the ledger: accounts with their realized transaction
//! log, escrowed transfers, and scheduled transfer jobs.
//!
//! Nothing in here consults a clock. Every time-dependent decision takes the
//! caller's logical timestamp as an argument.

pub mod account;
pub mod scheduled;
pub mod transaction;
pub mod transfer;

/// Logical time in milliseconds, supplied by the caller on every operation.
pub type Timestamp = i64;
