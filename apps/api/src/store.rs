//! Read-only access to the CV document on disk.
//!
//! The document is read fresh on every call and returned as opaque JSON.
//! No schema validation happens here; the renderer owns the typed view.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct CvStore {
    path: PathBuf,
}

impl CvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and parses the document.
    ///
    /// Missing file → `NotFound`, malformed JSON → `InvalidData`, any other
    /// I/O failure → `Internal`.
    pub async fn load(&self) -> Result<Value, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::NotFound("cv_data not found".to_string()));
            }
            Err(e) => {
                return Err(AppError::Internal(anyhow::Error::new(e).context(format!(
                    "Failed to read CV file {}",
                    self.path.display()
                ))));
            }
        };

        debug!("Read {} bytes from {}", bytes.len(), self.path.display());

        // Logged once, by `AppError::into_response`.
        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::InvalidData(format!("invalid JSON: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = CvStore::new(dir.path().join("absent.json"));
        assert!(matches!(store.load().await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_json_is_invalid_data() {
        let file = write_temp("{\"header\": {\"name\": ");
        let store = CvStore::new(file.path());
        assert!(matches!(store.load().await, Err(AppError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_empty_file_is_invalid_data() {
        let file = write_temp("");
        let store = CvStore::new(file.path());
        assert!(matches!(store.load().await, Err(AppError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_directory_path_is_internal() {
        let dir = tempfile::tempdir().unwrap();
        let store = CvStore::new(dir.path());
        assert!(matches!(store.load().await, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_valid_document_passes_through() {
        // No schema check: unknown keys and missing sections survive untouched.
        let file = write_temp(r#"{"zeta": 1, "header": {"name": "Ana"}, "alpha": [true, null]}"#);
        let store = CvStore::new(file.path());
        let value = store.load().await.unwrap();

        assert_eq!(value["header"]["name"], "Ana");
        assert_eq!(value["alpha"], serde_json::json!([true, null]));
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "header", "alpha"]);
    }

    #[tokio::test]
    async fn test_reads_fresh_on_every_call() {
        let file = write_temp(r#"{"v": 1}"#);
        let store = CvStore::new(file.path());
        assert_eq!(store.load().await.unwrap()["v"], 1);

        std::fs::write(file.path(), r#"{"v": 2}"#).unwrap();
        assert_eq!(store.load().await.unwrap()["v"], 2);
    }
}
