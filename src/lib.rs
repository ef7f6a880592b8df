//! Mi Playlist - personal video playlist manager
//!
//! This library keeps a flat playlist of video links with likes and
//! favorites, persisted to a JSON snapshot file after every change.

pub mod error;
pub mod link;
pub mod model;
pub mod snapshot;
pub mod store;

pub use error::{SnapshotError, ValidationError};
pub use model::Entry;
pub use snapshot::{JsonFileGateway, MemoryGateway, SnapshotGateway};
pub use store::{open_file_store, PlaylistStore, PlaylistSummary, StoreConfig};
