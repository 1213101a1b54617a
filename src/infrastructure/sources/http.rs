// ============================================================
// HTTP CATALOG SOURCE
// ============================================================
// Streams a remote catalog with progress logging and a request timeout

use super::CatalogSource;
use crate::domain::error::{AppError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Upper bound on the buffer reserved from `Content-Length`
const MAX_PREALLOCATION: usize = 8 << 20;

/// Catalog downloaded over http(s)
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: Url, timeout: Duration) -> Self {
        Self::with_client(reqwest::Client::new(), url, timeout)
    }

    pub fn with_client(client: reqwest::Client, url: Url, timeout: Duration) -> Self {
        Self {
            client,
            url,
            timeout,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        info!(url = %self.url, "Starting catalog download");

        let mut response = self
            .client
            .get(self.url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::SourceUnavailable(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::SourceUnavailable(format!(
                "Download failed ({}) for {}",
                status, self.url
            )));
        }

        // Content-Length is only a hint; the buffer grows with the chunks actually received
        let total = response.content_length();
        let reserve = total.map_or(0, |t| t.min(MAX_PREALLOCATION as u64) as usize);
        let mut content = Vec::with_capacity(reserve);

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| AppError::SourceUnavailable(format!("Download interrupted: {}", e)))?
        {
            content.extend_from_slice(&chunk);
            match total {
                Some(total) if total > 0 => debug!(
                    percent = content.len() as f64 * 100.0 / total as f64,
                    "Download progress"
                ),
                _ => debug!(bytes = content.len(), "Download progress"),
            }
        }

        info!(bytes = content.len(), "Catalog download complete");
        Ok(content)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
