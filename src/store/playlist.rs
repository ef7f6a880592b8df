//! The playlist store
//!
//! Owns the authoritative entry collection. Every mutation runs under the
//! write lock together with the snapshot save that follows it, so ids are
//! never handed out twice and snapshots are written in mutation order.
//! Readers share the read lock and get copies.

use super::config::StoreConfig;
use super::ids::IdGenerator;
use crate::error::ValidationError;
use crate::link::parse_video_id;
use crate::model::{seed_entries, Entry};
use crate::snapshot::SnapshotGateway;
use parking_lot::RwLock;
use std::collections::HashSet;

/// Totals shown alongside the playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub total: usize,
    pub favorites: usize,
    pub total_likes: u64,
}

/// Playlist of video entries persisted through a snapshot gateway
pub struct PlaylistStore<G: SnapshotGateway> {
    entries: RwLock<Vec<Entry>>,
    ids: IdGenerator,
    gateway: G,
}

impl<G: SnapshotGateway> PlaylistStore<G> {
    /// Open a store with the default configuration
    pub fn open(gateway: G) -> Self {
        Self::with_config(gateway, &StoreConfig::default())
    }

    /// Open a store, loading the persisted snapshot
    ///
    /// When the snapshot is absent, empty or unreadable the store starts with
    /// the example entries (unless `seed_defaults` is off) and saves right away.
    pub fn with_config(gateway: G, config: &StoreConfig) -> Self {
        let loaded = dedup_ids(gateway.load());

        if !loaded.is_empty() {
            let ids = IdGenerator::seeded_from(loaded.iter().map(|e| e.id));
            log::info!(
                "Loaded {} entries from {}",
                loaded.len(),
                gateway.location()
            );
            match ids.peek() {
                Some(next) => log::debug!("Next entry id {}", next),
                None => log::warn!(
                    "Snapshot uses the highest possible id, new entries will be rejected"
                ),
            }
            return Self {
                entries: RwLock::new(loaded),
                ids,
                gateway,
            };
        }

        let initial = if config.seed_defaults {
            seed_entries()
        } else {
            Vec::new()
        };
        let ids = IdGenerator::seeded_from(initial.iter().map(|e| e.id));

        let store = Self {
            entries: RwLock::new(initial),
            ids,
            gateway,
        };

        {
            let entries = store.entries.write();
            store.persist(&entries);
            log::info!(
                "Initialized playlist with {} entries at {}",
                entries.len(),
                store.gateway.location()
            );
        }

        store
    }

    /// Add a new entry
    ///
    /// Title and link are trimmed. The link must contain a video identifier.
    /// Fails with `IdsExhausted` once the highest id has been assigned.
    pub fn add(&self, title: &str, link: &str) -> Result<Entry, ValidationError> {
        let title = title.trim();
        let link = link.trim();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if link.is_empty() {
            return Err(ValidationError::EmptyLink);
        }
        if parse_video_id(link).is_none() {
            return Err(ValidationError::UnrecognizedLink(link.to_string()));
        }

        let mut entries = self.entries.write();
        let id = self.ids.next().ok_or(ValidationError::IdsExhausted)?;
        let entry = Entry::new(id, title, link);
        entries.push(entry.clone());
        self.persist(&entries);

        log::info!("Added entry {} \"{}\"", entry.id, entry.title);
        Ok(entry)
    }

    /// Remove the entry with `id`, returning whether it existed
    pub fn remove(&self, id: u64) -> bool {
        let mut entries = self.entries.write();
        let Some(index) = entries.iter().position(|e| e.id == id) else {
            log::debug!("Remove: no entry with id {}", id);
            return false;
        };

        let removed = entries.remove(index);
        self.persist(&entries);

        log::info!("Removed entry {} \"{}\"", removed.id, removed.title);
        true
    }

    /// Add one like to the entry with `id`
    pub fn increment_like(&self, id: u64) -> bool {
        self.update_entry(id, Entry::like)
    }

    /// Flip the favorite flag of the entry with `id`
    pub fn toggle_favorite(&self, id: u64) -> bool {
        self.update_entry(id, Entry::toggle_favorite)
    }

    /// Copy of the entry with `id`
    pub fn find_by_id(&self, id: u64) -> Option<Entry> {
        self.entries.read().iter().find(|e| e.id == id).cloned()
    }

    /// All entries in insertion order
    pub fn list_all(&self) -> Vec<Entry> {
        self.entries.read().clone()
    }

    /// Favorite entries in insertion order
    pub fn list_favorites(&self) -> Vec<Entry> {
        self.entries
            .read()
            .iter()
            .filter(|e| e.is_favorite)
            .cloned()
            .collect()
    }

    /// Number of entries
    pub fn count(&self) -> usize {
        self.entries.read().len()
    }

    /// Totals over one consistent view of the collection
    pub fn summary(&self) -> PlaylistSummary {
        let entries = self.entries.read();
        PlaylistSummary {
            total: entries.len(),
            favorites: entries.iter().filter(|e| e.is_favorite).count(),
            total_likes: entries
                .iter()
                .fold(0u64, |acc, e| acc.saturating_add(e.like_count)),
        }
    }

    /// Snapshot gateway the store writes through
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Locate an entry, apply `mutate`, persist, and report whether it was found
    fn update_entry<F>(&self, id: u64, mutate: F) -> bool
    where
        F: FnOnce(&mut Entry),
    {
        let mut entries = self.entries.write();
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            log::debug!("Update: no entry with id {}", id);
            return false;
        };

        mutate(entry);
        log::debug!(
            "Updated entry {}: likes={} favorite={}",
            entry.id,
            entry.like_count,
            entry.is_favorite
        );
        self.persist(&entries);
        true
    }

    /// Save the collection; failures are logged, memory stays authoritative
    fn persist(&self, entries: &[Entry]) {
        if let Err(e) = self.gateway.save(entries) {
            log::error!("Failed to save playlist to {}: {}", self.gateway.location(), e);
        }
    }
}

/// Drop entries whose id already appeared earlier in the snapshot
fn dedup_ids(entries: Vec<Entry>) -> Vec<Entry> {
    let mut seen = HashSet::with_capacity(entries.len());
    let before = entries.len();
    let kept: Vec<Entry> = entries.into_iter().filter(|e| seen.insert(e.id)).collect();

    if kept.len() != before {
        log::warn!(
            "Snapshot contained {} duplicate id(s), keeping first occurrences",
            before - kept.len()
        );
    }
    kept
}
