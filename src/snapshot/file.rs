//! JSON file snapshot gateway

use super::traits::SnapshotGateway;
use crate::error::SnapshotError;
use crate::model::Entry;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Snapshot file used when no path is configured
pub const DEFAULT_SNAPSHOT_FILE: &str = "playlist.json";

/// Stores the playlist as a pretty-printed JSON array of entries
///
/// Saves go to a sibling `<name>.tmp` file which is then renamed over the
/// snapshot, so a reader sees either the old or the new snapshot in full.
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    /// Create a gateway for the snapshot at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temporary file written before the atomic rename
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from(DEFAULT_SNAPSHOT_FILE));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Strict read of the snapshot
    ///
    /// Returns `Ok(None)` when no snapshot exists, `Err(Corrupt)` when the
    /// file cannot be parsed as a playlist.
    pub fn read(&self) -> Result<Option<Vec<Entry>>, SnapshotError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SnapshotError::io(&self.path, e)),
        };

        let entries: Vec<Entry> =
            serde_json::from_slice(&bytes).map_err(|source| SnapshotError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        Ok(Some(entries))
    }
}

impl Default for JsonFileGateway {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_FILE)
    }
}

impl SnapshotGateway for JsonFileGateway {
    fn load(&self) -> Vec<Entry> {
        match self.read() {
            Ok(Some(entries)) => {
                log::debug!("Read {} entries from {:?}", entries.len(), self.path);
                entries
            }
            Ok(None) => {
                log::info!("No snapshot at {:?}, starting fresh", self.path);
                Vec::new()
            }
            Err(e @ SnapshotError::Corrupt { .. }) => {
                log::warn!("Ignoring corrupt snapshot: {}", e);
                Vec::new()
            }
            Err(e) => {
                log::error!("Could not read snapshot: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[Entry]) -> Result<(), SnapshotError> {
        let json = serde_json::to_vec_pretty(entries).map_err(SnapshotError::Encode)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| SnapshotError::io(parent, e))?;
            }
        }

        let temp_path = self.temp_path();
        let written = File::create(&temp_path)
            .and_then(|mut file| {
                file.write_all(&json)?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&temp_path, &self.path));

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(SnapshotError::io(&self.path, e));
        }

        log::debug!("Saved {} entries to {:?}", entries.len(), self.path);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn erase(&self) -> bool {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("Erased snapshot {:?}", self.path);
                true
            }
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                log::error!("Failed to erase snapshot {:?}: {}", self.path, e);
                false
            }
        }
    }

    fn location(&self) -> String {
        fs::canonicalize(&self.path)
            .unwrap_or_else(|_| self.path.clone())
            .display()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::with_stats(1, "First", "https://youtu.be/aaa", 4, true),
            Entry::new(5, "Second", "https://www.youtube.com/embed/bbb"),
            Entry::with_stats(3, "Third", "https://www.youtube.com/watch?v=ccc", 1, false),
        ]
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let gateway = JsonFileGateway::new(dir.path().join("playlist.json"));

        assert!(!gateway.exists());
        assert!(gateway.read().unwrap().is_none());
        assert!(gateway.load().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let gateway = JsonFileGateway::new(dir.path().join("playlist.json"));

        gateway.save(&sample()).unwrap();
        assert!(gateway.exists());
        assert_eq!(gateway.load(), sample());

        // Saving what was loaded changes nothing
        gateway.save(&gateway.load()).unwrap();
        assert_eq!(gateway.load(), sample());
    }

    #[test]
    fn test_save_is_pretty_json_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("playlist.json");
        let gateway = JsonFileGateway::new(&path);

        gateway.save(&sample()).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert!(text.starts_with('['));
        assert!(text.contains('\n'));
        assert!(text.contains("\"nombre\": \"First\""));
        assert!(text.contains("\"favorito\": true"));
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let gateway = JsonFileGateway::new(dir.path().join("playlist.json"));

        gateway.save(&sample()).unwrap();
        gateway.save(&sample()[..1]).unwrap();

        assert!(!gateway.temp_path().exists());
        assert_eq!(gateway.load().len(), 1);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let gateway = JsonFileGateway::new(dir.path().join("nested/data/playlist.json"));

        gateway.save(&sample()).unwrap();
        assert_eq!(gateway.load().len(), 3);
    }

    #[test]
    fn test_corrupt_file_is_distinguished() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("playlist.json");
        fs::write(&path, "{ not json").unwrap();
        let gateway = JsonFileGateway::new(&path);

        assert!(matches!(gateway.read(), Err(SnapshotError::Corrupt { .. })));
        assert!(gateway.load().is_empty());
        // Corrupt file is left in place for inspection
        assert!(gateway.exists());
    }

    #[test]
    fn test_empty_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("playlist.json");
        fs::write(&path, "").unwrap();

        let gateway = JsonFileGateway::new(&path);
        assert!(matches!(gateway.read(), Err(SnapshotError::Corrupt { .. })));
    }

    #[test]
    fn test_erase() {
        let dir = TempDir::new().unwrap();
        let gateway = JsonFileGateway::new(dir.path().join("playlist.json"));

        assert!(!gateway.erase());
        gateway.save(&sample()).unwrap();
        assert!(gateway.erase());
        assert!(!gateway.exists());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let gateway = JsonFileGateway::new("/data/playlist.json");
        assert_eq!(gateway.temp_path(), PathBuf::from("/data/playlist.json.tmp"));
    }
}
