//! In-memory snapshot gateway
//!
//! Keeps the last saved snapshot in memory. Useful for tests and for running
//! a store that should not touch the filesystem.

use super::traits::SnapshotGateway;
use crate::error::SnapshotError;
use crate::model::Entry;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Snapshot gateway backed by a mutex-guarded vector
#[derive(Debug, Default)]
pub struct MemoryGateway {
    snapshot: Mutex<Option<Vec<Entry>>>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MemoryGateway {
    /// Create an empty gateway (no snapshot persisted)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway that already holds a snapshot
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            snapshot: Mutex::new(Some(entries)),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Copy of the last saved snapshot
    pub fn snapshot(&self) -> Option<Vec<Entry>> {
        self.snapshot.lock().clone()
    }
}

impl SnapshotGateway for MemoryGateway {
    fn load(&self) -> Vec<Entry> {
        self.snapshot.lock().clone().unwrap_or_default()
    }

    fn save(&self, entries: &[Entry]) -> Result<(), SnapshotError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(SnapshotError::Unavailable(
                "memory gateway configured to fail".to_string(),
            ));
        }

        *self.snapshot.lock() = Some(entries.to_vec());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.snapshot.lock().is_some()
    }

    fn erase(&self) -> bool {
        self.snapshot.lock().take().is_some()
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_gateway() {
        let gateway = MemoryGateway::new();
        assert!(!gateway.exists());
        assert!(gateway.load().is_empty());
        assert!(!gateway.erase());
    }

    #[test]
    fn test_save_and_erase() {
        let gateway = MemoryGateway::new();
        let entries = vec![Entry::new(1, "Song", "https://youtu.be/abc")];

        gateway.save(&entries).unwrap();
        assert!(gateway.exists());
        assert_eq!(gateway.load(), entries);
        assert_eq!(gateway.save_count(), 1);

        assert!(gateway.erase());
        assert!(!gateway.exists());
    }

    #[test]
    fn test_failing_saves_keep_previous_snapshot() {
        let gateway = MemoryGateway::with_entries(vec![Entry::new(1, "Old", "https://youtu.be/a")]);
        gateway.set_fail_saves(true);

        assert!(gateway.save(&[]).is_err());
        assert_eq!(gateway.load().len(), 1);
        assert_eq!(gateway.save_count(), 0);
    }
}
