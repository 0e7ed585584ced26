use std::sync::atomic::{AtomicUsize, Ordering};

use billed_domain::Bill;

use super::{BillStore, NetworkError};

/// In-memory store that either serves a fixed batch or always fails.
#[derive(Debug, Default)]
pub struct MockStore {
    bills: Vec<Bill>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockStore {
    pub fn new(bills: Vec<Bill>) -> Self {
        Self {
            bills,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Store whose every `list` call fails with `message`, e.g. `Erreur 404`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            bills: Vec::new(),
            failure: Some(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BillStore for MockStore {
    fn list(&self) -> Result<Vec<Bill>, NetworkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(NetworkError::new(message.clone())),
            None => Ok(self.bills.clone()),
        }
    }
}
