use crate::application::bank::Bank;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A cloneable, thread-safe handle to a single `Bank`.
///
/// Uses `Arc<Mutex<Bank>>`: one coarse lock guards the whole aggregate, so
/// every operation applies atomically with respect to every other one. A
/// ranking query can never observe a transfer that is half applied.
#[derive(Default, Clone)]
pub struct SharedBank {
    bank: Arc<Mutex<Bank>>,
}

impl SharedBank {
    /// Creates a handle around an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with exclusive access to the bank.
    pub async fn with<R>(&self, f: impl FnOnce(&mut Bank) -> R) -> R {
        let mut bank = self.bank.lock().await;
        f(&mut *bank)
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> Bank {
        self.bank.lock().await.clone()
    }
}

impl From<Bank> for SharedBank {
    fn from(bank: Bank) -> Self {
        Self {
            bank: Arc::new(Mutex::new(bank)),
        }
    }
}
