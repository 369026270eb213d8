//! ocrdesk-net - blocking HTTP fetch for the ocrdesk front-end
//!
//! Covers dictionary and language-pack downloads. One GET verb with a
//! timeout, nothing else.

pub mod download;
pub mod error;

pub use download::{download, Downloader, DEFAULT_TIMEOUT};
pub use error::{DownloadError, Result};
