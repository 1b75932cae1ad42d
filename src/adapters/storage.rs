use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // write next to the target, then swap it in
        let temp_path = temp_sibling(&full_path);
        let written = fs::write(&temp_path, data).and_then(|_| fs::rename(&temp_path, &full_path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("out/README.md", b"hello").await.unwrap();
        assert_eq!(storage.read_file("out/README.md").await.unwrap(), b"hello");
        assert!(!temp_dir.path().join("out/README.md.tmp").exists());
    }

    #[tokio::test]
    async fn test_write_overwrites_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("README.md", b"old content that is longer").await.unwrap();
        storage.write_file("README.md", b"new").await.unwrap();
        assert_eq!(storage.read_file("README.md").await.unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_document() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        storage.write_file("README.md", b"previous").await.unwrap();

        // a directory where the temp file should go makes the write fail
        fs::create_dir(temp_dir.path().join("README.md.tmp")).unwrap();
        assert!(storage.write_file("README.md", b"next").await.is_err());
        assert_eq!(storage.read_file("README.md").await.unwrap(), b"previous");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        let err = storage.read_file("missing.yml").await.unwrap_err();
        assert!(matches!(err, crate::utils::error::TableError::IoError(_)));
    }
}
