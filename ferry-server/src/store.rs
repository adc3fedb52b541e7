//! Shared snapshot storage.
//!
//! The schedule is the only mutable state shared between the refresh loop
//! and request handlers. It is replaced wholesale on every successful
//! refresh, never patched, so all synchronization reduces to swapping one
//! `Arc` behind a lock held only for the swap itself. Producer I/O happens
//! entirely outside the lock.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::ScheduleSnapshot;

/// Thread-safe holder for the current [`ScheduleSnapshot`].
///
/// Single writer (the refresh loop), many readers (request handlers).
/// [`current`] hands out an `Arc` to the installed snapshot; a reader keeps
/// its snapshot valid to the end of the request even if a [`replace`] lands
/// mid-flight, so a response is always built from one self-consistent
/// generation of data.
///
/// [`current`]: SnapshotStore::current
/// [`replace`]: SnapshotStore::replace
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    inner: Arc<RwLock<Arc<ScheduleSnapshot>>>,
}

impl SnapshotStore {
    /// Create a store holding an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a snapshot.
    pub fn with_snapshot(snapshot: ScheduleSnapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(snapshot))),
        }
    }

    /// The currently installed snapshot.
    ///
    /// Never blocks longer than a concurrent [`replace`]'s pointer swap.
    ///
    /// [`replace`]: SnapshotStore::replace
    pub async fn current(&self) -> Arc<ScheduleSnapshot> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    /// Install a new snapshot as current.
    ///
    /// The previous snapshot stays alive until the last in-flight reader
    /// drops its `Arc`.
    pub async fn replace(&self, snapshot: ScheduleSnapshot) {
        let snapshot = Arc::new(snapshot);
        let mut guard = self.inner.write().await;
        *guard = snapshot;
    }
}
