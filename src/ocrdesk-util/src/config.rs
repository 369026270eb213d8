//! Configuration management

use crate::error::Result;
use crate::{paths, spelling};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Front-end utility settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory recognition output is written to
    pub output_dir: PathBuf,

    /// Spelling language used when none is requested
    pub default_spelling_language: String,

    /// Directories scanned for hunspell dictionaries
    pub dictionary_paths: Vec<PathBuf>,

    /// Download timeout in milliseconds
    pub download_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: paths::documents_folder(),
            default_spelling_language: "en_US".to_string(),
            dictionary_paths: spelling::default_search_paths(),
            download_timeout_ms: 60_000,
        }
    }
}

impl Settings {
    /// Settings file location in the platform config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ocrdesk")
            .join("settings.json")
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_millis(self.download_timeout_ms)
    }

    /// Load settings from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&raw)?;
        debug!("loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn store(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!("stored settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.download_timeout(), Duration::from_secs(60));
        assert_eq!(settings.default_spelling_language, "en_US");
        assert!(!settings.output_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_store_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("settings.json");

        let mut settings = Settings::default();
        settings.default_spelling_language = "de_DE".to_string();
        settings.download_timeout_ms = 5_000;
        settings.store(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.default_spelling_language, "de_DE");
        assert_eq!(loaded.download_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(Settings::load(Path::new("/nonexistent/settings.json")).is_err());
    }
}
