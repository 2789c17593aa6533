use thiserror::Error;

/// Every failure the ledger can report.
///
/// Business-rule violations are ordinary values returned to the caller;
/// none of them leave the ledger in a partially applied state.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("Account already exists: {0}")]
    AccountExists(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: String,
        balance: u64,
        requested: u64,
    },
    #[error("Transfer {0} is already finalized")]
    AlreadyFinalized(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LedgerError {
    pub fn account_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: "Account",
            id: id.to_string(),
        }
    }

    pub fn transfer_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: "Transfer",
            id: id.to_string(),
        }
    }

    /// Short, stable identifier used when rendering command results.
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::NotFound { .. } => "not_found",
            LedgerError::AccountExists(_) => "account_exists",
            LedgerError::InvalidArgument(_) => "invalid_argument",
            LedgerError::InsufficientFunds { .. } => "insufficient_funds",
            LedgerError::AlreadyFinalized(_) => "already_finalized",
            LedgerError::CsvError(_) => "csv",
            LedgerError::IoError(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_entity() {
        let err = LedgerError::transfer_not_found("transfer7");
        assert_eq!(err.to_string(), "Transfer not found: transfer7");
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn test_insufficient_funds_message() {
        let err = LedgerError::InsufficientFunds {
            account: "alice".to_string(),
            balance: 10,
            requested: 50,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds in account alice: balance 10, requested 50"
        );
        assert_eq!(err.code(), "insufficient_funds");
    }
}
