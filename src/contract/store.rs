//! On-disk JSON artifact access.
//!
//! Contract state, contract data and clause requests are all small JSON
//! files, so reads and writes are synchronous and whole-file. Failures
//! come back as [`StoreError`] values; callers convert them into response
//! envelopes instead of letting them propagate.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Failures while loading or persisting a JSON artifact.
///
/// Absence, unreadability and corruption are distinct variants so callers
/// can choose different recovery per failure kind.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The artifact does not exist.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// The artifact exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The artifact was read but is not valid JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The artifact could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a file and parse it as JSON.
pub fn load_json(path: &Path) -> Result<Value, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as compact JSON and overwrite `path` with it.
///
/// The write replaces the previous contents wholesale; the bytes on disk
/// are exactly the compact serialization of `value`.
pub fn save_json(path: &Path, value: &Value) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec(value).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::Other, e),
    })?;

    fs::write(path, bytes).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json(&dir.path().join("state.json")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let state = json!({"balance": 0, "status": "CREATED"});

        save_json(&path, &state).unwrap();
        assert_eq!(load_json(&path).unwrap(), state);
    }

    #[test]
    fn test_save_writes_compact_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let state = json!({"balance": 12, "litigation": false});

        save_json(&path, &state).unwrap();
        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, serde_json::to_string(&state).unwrap());
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        save_json(&path, &json!({"balance": 0})).unwrap();
        save_json(&path, &json!({"balance": 7})).unwrap();
        assert_eq!(load_json(&path).unwrap(), json!({"balance": 7}));
    }

    #[test]
    fn test_save_into_unwritable_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        // A directory where a file is expected makes the write fail.
        fs::create_dir(&path).unwrap();

        let err = save_json(&path, &json!({})).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }
}
