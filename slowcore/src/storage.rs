//! Storage utilities for Slow Computer apps
//!
//! Handles per-app config locations and JSON preference files.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the config directory for Slow Computer apps
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Read a JSON document from `path`.
///
/// A missing file is reported as [`StorageError::NotFound`] so callers can
/// tell "never written" apart from "unreadable".
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StorageError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Write `value` as pretty JSON, creating parent directories as needed.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        size: u32,
        name: String,
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_json::<Prefs>(&path).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(p) if p == path));
    }

    #[test]
    fn test_unreadable_path_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json::<Prefs>(dir.path()).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)), "{err:?}");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let prefs = Prefs { size: 3, name: "calc".into() };
        save_json(&prefs, &path).unwrap();
        assert_eq!(load_json::<Prefs>(&path).unwrap(), prefs);
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_json::<Prefs>(&path), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_config_dir_ends_with_app() {
        let dir = config_dir("slowcalc");
        let as_text = dir.to_string_lossy().to_lowercase();
        assert!(as_text.contains("slowcalc") || dir == PathBuf::from("."));
    }
}
