//! Snapshot persistence layer
//!
//! The store writes its whole collection through a `SnapshotGateway` after
//! every mutation and reads it back once at startup. `JsonFileGateway` is the
//! durable implementation; `MemoryGateway` keeps snapshots in memory for tests
//! and throwaway sessions.

mod file;
mod memory;
mod traits;

pub use file::{JsonFileGateway, DEFAULT_SNAPSHOT_FILE};
pub use memory::MemoryGateway;
pub use traits::SnapshotGateway;
