//! Playlist data model
//!
//! `Entry` is both the in-memory record and the snapshot record; its
//! serialized field names are fixed by the snapshot file format.

mod entry;
mod seed;

pub use entry::Entry;
pub use seed::{seed_entries, SeedEntry, SEED};
