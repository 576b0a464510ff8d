//! Persistence of the latest generated target name.
//!
//! CHANGELOG:
//! - 10/14/2026 - Blank stored names read as absent
//! - 10/14/2026 - Initial implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the store location.
pub const STORE_PATH_ENV: &str = "NAMECHECK_STORE_PATH";

const STORE_FILE_NAME: &str = "latest_target.json";

/// Default store path.
///
/// Tries multiple locations in order:
/// 1. NAMECHECK_STORE_PATH env var
/// 2. Platform data directory (e.g. ~/.local/share/namecheck/latest_target.json)
/// 3. .namecheck/latest_target.json in the working directory
pub fn default_store_path() -> PathBuf {
    resolve_store_path(std::env::var(STORE_PATH_ENV).ok(), dirs::data_local_dir())
}

fn resolve_store_path(env_path: Option<String>, data_dir: Option<PathBuf>) -> PathBuf {
    if let Some(path) = env_path.filter(|path| !path.trim().is_empty()) {
        return PathBuf::from(path);
    }

    if let Some(data_dir) = data_dir {
        return data_dir.join("namecheck").join(STORE_FILE_NAME);
    }

    PathBuf::from(".namecheck").join(STORE_FILE_NAME)
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access target store at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("target store at {path:?} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode target record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Stored form of the latest target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub name: String,
    #[serde(default)]
    pub prompt: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// Read/write access to the latest target name.
pub trait TargetStore {
    /// The latest target name, or `None` if nothing has been generated.
    fn latest_target_name(&self) -> Result<Option<String>, StoreError>;

    /// Replace the latest target name.
    fn set_latest_target_name(&mut self, name: &str, prompt: Option<&str>)
        -> Result<(), StoreError>;
}

fn non_blank(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Keeps the latest target as a single JSON record on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`default_store_path`].
    pub fn open_default() -> Self {
        Self::new(default_store_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full record, if one exists.
    pub fn load(&self) -> Result<Option<TargetRecord>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if content.trim().is_empty() {
            return Ok(None);
        }

        let record: TargetRecord =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(record))
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TargetStore for FileStore {
    fn latest_target_name(&self) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.and_then(|record| non_blank(&record.name)))
    }

    fn set_latest_target_name(
        &mut self,
        name: &str,
        prompt: Option<&str>,
    ) -> Result<(), StoreError> {
        // Create parent directory if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
            }
        }

        let record = TargetRecord {
            name: name.trim().to_string(),
            prompt: prompt.map(String::from),
            generated_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&record)?;
        std::fs::write(&self.path, json).map_err(|source| self.io_error(source))?;

        tracing::debug!(path = ?self.path, "stored latest target name");
        Ok(())
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<TargetRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: &str) -> Self {
        Self {
            record: Some(TargetRecord {
                name: name.to_string(),
                prompt: None,
                generated_at: Utc::now(),
            }),
        }
    }

    pub fn record(&self) -> Option<&TargetRecord> {
        self.record.as_ref()
    }
}

impl TargetStore for MemoryStore {
    fn latest_target_name(&self) -> Result<Option<String>, StoreError> {
        Ok(self.record.as_ref().and_then(|record| non_blank(&record.name)))
    }

    fn set_latest_target_name(
        &mut self,
        name: &str,
        prompt: Option<&str>,
    ) -> Result<(), StoreError> {
        self.record = Some(TargetRecord {
            name: name.trim().to_string(),
            prompt: prompt.map(String::from),
            generated_at: Utc::now(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("missing.json"));
        assert_eq!(store.latest_target_name().unwrap(), None);
    }

    #[test]
    fn test_round_trip_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("latest.json"));
        store
            .set_latest_target_name("  Sarah Al Masri ", Some("a name"))
            .unwrap();

        assert_eq!(
            store.latest_target_name().unwrap().as_deref(),
            Some("Sarah Al Masri")
        );
        let record = store.load().unwrap().unwrap();
        assert_eq!(record.prompt.as_deref(), Some("a name"));
    }

    #[test]
    fn test_blank_name_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest.json");
        std::fs::write(
            &path,
            r#"{"name": "   ", "generated_at": "2026-10-14T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(FileStore::new(&path).latest_target_name().unwrap(), None);

        std::fs::write(&path, "").unwrap();
        assert_eq!(FileStore::new(&path).latest_target_name().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest.json");
        std::fs::write(&path, "not json").unwrap();
        let err = FileStore::new(&path).latest_target_name().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.latest_target_name().unwrap(), None);
        store.set_latest_target_name("Omar Al Saud", None).unwrap();
        assert_eq!(
            store.latest_target_name().unwrap().as_deref(),
            Some("Omar Al Saud")
        );
    }

    #[test]
    fn test_store_path_prefers_env_var() {
        let path = resolve_store_path(
            Some("/tmp/custom.json".to_string()),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_store_path_ignores_blank_env_var() {
        let path = resolve_store_path(Some("  ".to_string()), Some(PathBuf::from("/data")));
        assert_eq!(path, PathBuf::from("/data/namecheck/latest_target.json"));
    }

    #[test]
    fn test_store_path_falls_back_to_working_directory() {
        assert_eq!(
            resolve_store_path(None, None),
            PathBuf::from(".namecheck/latest_target.json")
        );
    }
}
