//! Persistence Seam
//!
//! The stores do no I/O themselves. A [`SnapshotSink`] is handed the full
//! state after each successful mutation; restoring is the caller's job,
//! done once before first use via `Store::restore`. Snapshots must round
//! trip verbatim, with no transformation of record fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{DomainError, DomainResult};

/// Post-mutation persistence hook
pub trait SnapshotSink<S> {
    /// Persist a snapshot of the full state.
    ///
    /// Errors are logged by the store and never fail the mutation.
    fn persist(&mut self, state: &S) -> DomainResult<()>;
}

/// JSON-file snapshot sink
///
/// Writes the whole state as pretty-printed JSON through a temp file and
/// an atomic rename, so a crash mid-write leaves the previous snapshot
/// intact.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load a previously persisted snapshot, `None` if no file exists yet
    pub fn load<S: DeserializeOwned>(&self) -> DomainResult<Option<S>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path).map_err(|e| DomainError::Persistence(e.to_string()))?;
        let state =
            serde_json::from_slice(&bytes).map_err(|e| DomainError::Persistence(e.to_string()))?;
        Ok(Some(state))
    }
}

impl<S: Serialize> SnapshotSink<S> for JsonFileSink {
    fn persist(&mut self, state: &S) -> DomainResult<()> {
        let json = serde_json::to_vec_pretty(state)
            .map_err(|e| DomainError::Persistence(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).map_err(|e| DomainError::Persistence(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| DomainError::Persistence(e.to_string()))?;
        Ok(())
    }
}
