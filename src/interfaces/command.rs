use crate::application::bank::Bank;
use crate::domain::transfer::TransferStatus;
use crate::error::{LedgerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    CreateAccount,
    Deposit,
    Withdraw,
    Balance,
    Transfer,
    Accept,
    Status,
    Schedule,
    Process,
    Volume,
    Top,
    History,
    Scheduled,
}

/// One operation against the bank, as read from a command file.
///
/// Columns are shared between operations. `id` is the account for account
/// operations and the sender for `transfer`/`schedule`, or the transfer id
/// for `accept`/`status`. `time` is the logical timestamp, or the due time
/// for `schedule`. `top` reads its N from `amount`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub op: Operation,
    pub id: Option<String>,
    pub to: Option<String>,
    pub amount: Option<i64>,
    pub time: Option<i64>,
    pub ttl: Option<i64>,
}

/// What a successful command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Done,
    Amount(u64),
    Id(String),
    Status(TransferStatus),
    List(Vec<String>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => f.write_str("true"),
            Outcome::Amount(value) => write!(f, "{value}"),
            Outcome::Id(id) => f.write_str(id),
            Outcome::Status(status) => write!(f, "{status}"),
            Outcome::List(items) => f.write_str(&items.join(";")),
        }
    }
}

impl Command {
    pub fn new(op: Operation) -> Self {
        Self {
            op,
            id: None,
            to: None,
            amount: None,
            time: None,
            ttl: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Applies the command to `bank`.
    pub fn apply(&self, bank: &mut Bank) -> Result<Outcome> {
        match self.op {
            Operation::CreateAccount => {
                bank.create_account(self.id_field()?)?;
                Ok(Outcome::Done)
            }
            Operation::Deposit => bank
                .deposit(self.id_field()?, self.amount_field()?, self.time_field()?)
                .map(Outcome::Amount),
            Operation::Withdraw => bank
                .withdraw(self.id_field()?, self.amount_field()?, self.time_field()?)
                .map(Outcome::Amount),
            Operation::Balance => bank.balance(self.id_field()?).map(Outcome::Amount),
            Operation::Transfer => bank
                .create_transfer(
                    self.id_field()?,
                    self.to_field()?,
                    self.amount_field()?,
                    self.time_field()?,
                    self.ttl_field()?,
                )
                .map(Outcome::Id),
            Operation::Accept => {
                bank.accept_transfer(self.id_field()?, self.time_field()?)?;
                Ok(Outcome::Done)
            }
            Operation::Status => bank
                .transfer_status(self.id_field()?, self.time_field()?)
                .map(Outcome::Status),
            Operation::Schedule => bank
                .schedule_transfer(
                    self.id_field()?,
                    self.to_field()?,
                    self.amount_field()?,
                    self.time_field()?,
                    self.ttl_field()?,
                )
                .map(Outcome::Id),
            Operation::Process => Ok(Outcome::List(
                bank.process_scheduled_transfers(self.time_field()?),
            )),
            Operation::Volume => bank
                .transaction_volume(self.id_field()?, self.time_field()?)
                .map(Outcome::Amount),
            Operation::Top => {
                let n = usize::try_from(self.amount_field()?).map_err(|_| {
                    LedgerError::InvalidArgument("Top N must be non-negative".to_string())
                })?;
                Ok(Outcome::List(
                    bank.top_accounts_by_volume(n, self.time_field()?),
                ))
            }
            Operation::History => bank
                .transaction_history(self.id_field()?, self.time_field()?)
                .map(Outcome::List),
            Operation::Scheduled => bank
                .scheduled_transfer_ids(self.id_field()?)
                .map(Outcome::List),
        }
    }

    fn id_field(&self) -> Result<&str> {
        self.id.as_deref().ok_or_else(|| self.missing("id"))
    }

    fn to_field(&self) -> Result<&str> {
        self.to.as_deref().ok_or_else(|| self.missing("to"))
    }

    fn amount_field(&self) -> Result<i64> {
        self.amount.ok_or_else(|| self.missing("amount"))
    }

    fn time_field(&self) -> Result<i64> {
        self.time.ok_or_else(|| self.missing("time"))
    }

    fn ttl_field(&self) -> Result<i64> {
        self.ttl.ok_or_else(|| self.missing("ttl"))
    }

    fn missing(&self, field: &str) -> LedgerError {
        LedgerError::InvalidArgument(format!("Missing field '{field}' for {:?}", self.op))
    }
}
