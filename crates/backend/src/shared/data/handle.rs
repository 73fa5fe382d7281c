use std::sync::{Arc, RwLock};

use super::store::ScorecardSnapshot;

/// Current snapshot, swappable as a whole on data refresh.
///
/// Readers get an `Arc` to one complete snapshot, so a single computation
/// never mixes thresholds from two policy epochs.
#[derive(Debug)]
pub struct SnapshotHandle {
    inner: RwLock<Arc<ScorecardSnapshot>>,
}

impl SnapshotHandle {
    pub fn new(snapshot: ScorecardSnapshot) -> Self {
        Self {
            inner: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub fn current(&self) -> Arc<ScorecardSnapshot> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Install a new snapshot and return the previous one.
    pub fn replace(&self, snapshot: ScorecardSnapshot) -> Arc<ScorecardSnapshot> {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let previous = std::mem::replace(&mut *guard, Arc::new(snapshot));
        tracing::info!(
            "snapshot replaced: {} -> {} periods",
            previous.history().len(),
            guard.history().len()
        );
        previous
    }
}
