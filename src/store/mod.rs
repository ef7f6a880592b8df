//! Playlist store and its configuration

pub mod config;
pub mod ids;
pub mod playlist;

pub use config::StoreConfig;
pub use ids::IdGenerator;
pub use playlist::{PlaylistStore, PlaylistSummary};

use crate::snapshot::JsonFileGateway;

/// Open a store backed by the JSON snapshot file named in `config`
pub fn open_file_store(config: &StoreConfig) -> PlaylistStore<JsonFileGateway> {
    let path = config.resolved_snapshot_path();
    log::debug!("Opening playlist snapshot {:?}", path);
    PlaylistStore::with_config(JsonFileGateway::new(path), config)
}
