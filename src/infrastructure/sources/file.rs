// ============================================================
// FILE CATALOG SOURCE
// ============================================================
// Local catalog files read with tokio::fs

use super::CatalogSource;
use crate::domain::error::{AppError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Catalog stored on the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        info!(path = %self.path.display(), "Reading catalog file");

        tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::SourceUnavailable(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_file() {
        let path = std::env::temp_dir().join(format!("catalog-{}.csv", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, b"x,y,z\n1,2,3\n").await.unwrap();

        let source = FileSource::new(&path);
        let content = source.fetch().await.unwrap();
        assert_eq!(content, b"x,y,z\n1,2,3\n".to_vec());

        tokio::fs::remove_file(&path).await.ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_source_unavailable() {
        let path = std::env::temp_dir().join(format!("missing-{}.csv", uuid::Uuid::new_v4()));
        let err = FileSource::new(path).fetch().await.unwrap_err();
        assert!(matches!(err, AppError::SourceUnavailable(_)));
    }
}
