//! Snapshot gateway trait

use crate::error::SnapshotError;
use crate::model::Entry;

/// Storage backend for whole-playlist snapshots
pub trait SnapshotGateway: Send + Sync {
    /// Read the persisted entries in insertion order
    ///
    /// Never fails: a missing or unreadable snapshot yields an empty vector.
    /// Implementations log which of the two happened.
    fn load(&self) -> Vec<Entry>;

    /// Replace the persisted snapshot with `entries`
    ///
    /// A failed save must leave the previous snapshot readable.
    fn save(&self, entries: &[Entry]) -> Result<(), SnapshotError>;

    /// Whether a snapshot has been persisted
    fn exists(&self) -> bool;

    /// Remove the persisted snapshot, returning whether one was removed
    fn erase(&self) -> bool;

    /// Human-readable location, used in log lines
    fn location(&self) -> String;
}

impl<G: SnapshotGateway + ?Sized> SnapshotGateway for &G {
    fn load(&self) -> Vec<Entry> {
        (**self).load()
    }

    fn save(&self, entries: &[Entry]) -> Result<(), SnapshotError> {
        (**self).save(entries)
    }

    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn erase(&self) -> bool {
        (**self).erase()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
