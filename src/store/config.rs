//! Store configuration

use crate::snapshot::DEFAULT_SNAPSHOT_FILE;
use std::path::PathBuf;

/// Configuration for opening a playlist store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Snapshot file location, `~` is expanded on use
    pub snapshot_path: PathBuf,

    /// Populate the example entries when no snapshot is found
    pub seed_defaults: bool,
}

impl StoreConfig {
    /// Create a configuration for the given snapshot path
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            seed_defaults: true,
        }
    }

    /// Set the snapshot path
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = path.into();
        self
    }

    /// Start with an empty playlist instead of the example entries
    pub fn without_seed(mut self) -> Self {
        self.seed_defaults = false;
        self
    }

    /// Snapshot path with a leading `~` expanded to the home directory
    pub fn resolved_snapshot_path(&self) -> PathBuf {
        let raw = self.snapshot_path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&raw).as_ref())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.snapshot_path, PathBuf::from("playlist.json"));
        assert!(config.seed_defaults);
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::default()
            .with_snapshot_path("/tmp/other.json")
            .without_seed();
        assert_eq!(config.resolved_snapshot_path(), PathBuf::from("/tmp/other.json"));
        assert!(!config.seed_defaults);
    }

    #[test]
    fn test_tilde_is_expanded() {
        let config = StoreConfig::new("~/playlist.json");
        let resolved = config.resolved_snapshot_path();
        assert!(resolved.ends_with("playlist.json"));
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(resolved, PathBuf::from(home).join("playlist.json"));
        }
    }
}
