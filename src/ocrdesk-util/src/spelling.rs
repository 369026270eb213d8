//! Spelling-language resolution
//!
//! Enumerates hunspell-style dictionaries (a `.dic` file with a matching
//! `.aff`) from a set of search paths and maps requested language tags
//! onto an installed dictionary.

use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;

/// Installed spell-check dictionaries discovered on disk.
pub struct SpellingDictionaries {
    search_paths: Vec<PathBuf>,
}

impl SpellingDictionaries {
    /// Use an explicit set of dictionary search paths.
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Use the platform's default hunspell locations.
    pub fn system() -> Self {
        Self::new(default_search_paths())
    }

    /// Sorted tags of every complete dictionary found under the search
    /// paths. Unreadable directories are skipped.
    pub fn installed(&self) -> Vec<String> {
        let mut tags = BTreeSet::new();
        for dir in &self.search_paths {
            let entries = match std::fs::read_dir(dir) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!("skipping dictionary path {:?}: {}", dir, e);
                    continue;
                }
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("dic") {
                    continue;
                }
                // A dictionary is only usable with its affix file.
                if !path.with_extension("aff").exists() {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    tags.insert(stem.to_string());
                }
            }
        }
        tags.into_iter().collect()
    }

    /// Map `requested` onto an installed dictionary tag.
    ///
    /// An empty request resolves to `default`. Otherwise the first of:
    /// an exact match (case and separator insensitive), any dictionary
    /// for the same language (`de` matches `de_DE`, `de_AT` falls back
    /// to `de_DE`), then `default`.
    pub fn resolve(&self, requested: &str, default: &str) -> String {
        if requested.is_empty() {
            return default.to_string();
        }
        let installed = self.installed();
        let wanted = normalize(requested);

        if let Some(tag) = installed.iter().find(|tag| normalize(tag) == wanted) {
            return tag.clone();
        }

        let wanted_lang = language_part(&wanted).to_string();
        if let Some(tag) = installed
            .iter()
            .find(|tag| language_part(&normalize(tag)) == wanted_lang)
        {
            debug!("spelling language {} unavailable, using {}", requested, tag);
            return tag.clone();
        }

        debug!("spelling language {} unavailable, using default {}", requested, default);
        default.to_string()
    }
}

/// Default hunspell dictionary locations for the platform.
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    #[cfg(unix)]
    {
        paths.push(PathBuf::from("/usr/share/hunspell"));
        paths.push(PathBuf::from("/usr/local/share/hunspell"));
        paths.push(PathBuf::from("/usr/share/myspell"));
    }
    if let Some(data) = dirs::data_dir() {
        paths.push(data.join("hunspell"));
    }
    paths
}

fn normalize(tag: &str) -> String {
    tag.to_ascii_lowercase().replace('-', "_")
}

fn language_part(tag: &str) -> &str {
    tag.split('_').next().unwrap_or(tag)
}
