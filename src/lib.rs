pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod logging;

pub use application::bank::Bank;
pub use domain::transfer::TransferStatus;
pub use error::{LedgerError, Result};
pub use infrastructure::in_memory::SharedBank;
