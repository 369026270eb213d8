//! Filesystem and output-naming helpers

use std::path::{Path, PathBuf};
use tracing::debug;

/// Platform documents directory, falling back to the home directory.
pub fn documents_folder() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Derive a non-colliding output filename from a candidate path.
///
/// A candidate that does not exist yet is returned unchanged. Otherwise
/// any trailing `_N` counter is stripped from the file stem and counters
/// are probed upwards until an unused name is found.
pub fn make_output_filename(candidate: impl AsRef<Path>) -> PathBuf {
    let candidate = candidate.as_ref();
    if !candidate.exists() {
        return candidate.to_path_buf();
    }

    let dir = candidate.parent().unwrap_or_else(|| Path::new(""));
    let stem = candidate
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = candidate.extension().and_then(|s| s.to_str());
    let base = strip_counter(stem);

    for i in 1u32.. {
        let name = match ext {
            Some(ext) => format!("{}_{}.{}", base, i, ext),
            None => format!("{}_{}", base, i),
        };
        let probe = dir.join(name);
        if !probe.exists() {
            debug!("output filename {:?} resolved to {:?}", candidate, probe);
            return probe;
        }
    }
    unreachable!("ran out of output filename counters")
}

/// Strip a trailing `_N` counter so repeated derivations do not stack
/// suffixes (`scan_2` probes `scan_1`, not `scan_2_1`).
fn strip_counter(stem: &str) -> &str {
    match stem.rsplit_once('_') {
        Some((base, digits))
            if !base.is_empty()
                && !digits.is_empty()
                && digits.bytes().all(|b| b.is_ascii_digit()) =>
        {
            base
        }
        _ => stem,
    }
}
