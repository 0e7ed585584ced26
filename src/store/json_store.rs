use std::{fs, path::PathBuf};

use billed_domain::Bill;

use crate::errors::BillsError;

use super::{decode_batch, BillStore, NetworkError};

/// Serves bills from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonBillStore {
    path: PathBuf,
}

impl JsonBillStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and validates the file, keeping the precise failure.
    pub fn load(&self) -> Result<Vec<Bill>, BillsError> {
        let data = fs::read_to_string(&self.path)?;
        decode_batch(&data)
    }
}

impl BillStore for JsonBillStore {
    fn list(&self) -> Result<Vec<Bill>, NetworkError> {
        tracing::debug!(path = %self.path.display(), "listing bills from file");
        self.load().map_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "bill store unavailable");
            NetworkError::new(err.to_string())
        })
    }
}
