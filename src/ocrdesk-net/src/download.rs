//! Blocking download helper
//!
//! One synchronous GET per call; redirects follow reqwest's default
//! policy (up to 10 hops). Timeouts, transport failures and non-success
//! statuses all surface as [`DownloadError`], whose display string is
//! the user-facing diagnostic.

use crate::error::{DownloadError, Result};
use std::time::Duration;
use tracing::{debug, warn};

/// Timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Blocking HTTP client with a fixed per-request timeout.
pub struct Downloader {
    client: reqwest::blocking::Client,
}

impl Downloader {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch the raw response body at `url`.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("downloading {}", url);
        let response = self.client.get(url).send().map_err(|e| {
            warn!("download of {} failed: {}", url, e);
            DownloadError::Request(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("download of {} failed with status {}", url, status);
            return Err(DownloadError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes()?;
        debug!("downloaded {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

/// Fetch `url` with the default timeout.
pub fn download(url: &str) -> Result<Vec<u8>> {
    Downloader::new(DEFAULT_TIMEOUT)?.fetch(url)
}
