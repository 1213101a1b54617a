// ============================================================
// CATALOG SOURCES
// ============================================================
// Catalog text acquisition behind the CatalogSource trait

pub mod file;
pub mod http;

use crate::domain::error::{AppError, Result};
use async_trait::async_trait;
use file::FileSource;
use http::HttpSource;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Anything that can hand over the full catalog text in one call.
///
/// Dropping the returned future cancels an in-flight fetch.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;
    fn describe(&self) -> String;
}

/// Catalog bytes already in memory (embedded assets, tests)
pub struct InlineSource {
    name: String,
    content: Vec<u8>,
}

impl InlineSource {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for InlineSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        format!("inline '{}'", self.name)
    }
}

/// Where a catalog lives, as given on the command line or in config
#[derive(Debug, Clone, PartialEq)]
pub enum SourceLocation {
    File(PathBuf),
    Remote(Url),
}

impl SourceLocation {
    pub fn parse(location: &str) -> Result<Self> {
        let location = location.trim();
        if location.is_empty() {
            return Err(AppError::ValidationError(
                "Catalog source location is empty".to_string(),
            ));
        }

        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::Remote(url)),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(Self::File)
                .map_err(|_| AppError::ValidationError(format!("Invalid file URL: {}", url))),
            // Anything else (including `C:\...` parsed as scheme "c") is a path
            _ => Ok(Self::File(PathBuf::from(location))),
        }
    }

    pub fn into_source(self, timeout: Duration) -> Box<dyn CatalogSource> {
        match self {
            SourceLocation::File(path) => Box::new(FileSource::new(path)),
            SourceLocation::Remote(url) => Box::new(HttpSource::new(url, timeout)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locations() {
        assert!(matches!(
            SourceLocation::parse("https://example.com/hyg.csv").unwrap(),
            SourceLocation::Remote(_)
        ));
        assert_eq!(
            SourceLocation::parse("data/stars.csv").unwrap(),
            SourceLocation::File(PathBuf::from("data/stars.csv"))
        );
        assert!(matches!(
            SourceLocation::parse("/tmp/stars.csv").unwrap(),
            SourceLocation::File(_)
        ));
        assert!(SourceLocation::parse("   ").is_err());
    }

    #[tokio::test]
    async fn test_inline_source() {
        let source = InlineSource::new("demo", "ra,dec\n1,2\n");
        assert_eq!(source.fetch().await.unwrap(), b"ra,dec\n1,2\n".to_vec());
        assert_eq!(source.describe(), "inline 'demo'");
    }
}
