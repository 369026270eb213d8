//! Download error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

pub type Result<T> = std::result::Result<T, DownloadError>;
