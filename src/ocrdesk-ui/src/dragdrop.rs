//! Drag-and-drop payload inspection
//!
//! Decides whether a dragged payload can be consumed and hands accepted
//! file references and inline image data to the application.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Extensions accepted besides the raster formats the image crate knows.
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "djvu"];

/// Declared content of a drag payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DragPayload {
    /// URIs the payload declares (`file://...`, plain paths, remote URLs)
    pub uris: Vec<String>,
    /// Inline image data carried directly by the payload, if any
    pub image: Option<Vec<u8>>,
}

/// Application-side receiver for dropped content.
pub trait SourceSink {
    fn add_source(&mut self, path: PathBuf);
    fn add_image(&mut self, data: &[u8]);
}

/// Whether the application can consume `payload`. No side effects.
pub fn is_acceptable(payload: &DragPayload) -> bool {
    payload.image.is_some() || payload.uris.iter().any(|uri| uri_is_supported(uri))
}

/// Feed every accepted local file and any inline image data in
/// `payload` to `sink`.
pub fn handle_drop(payload: &DragPayload, sink: &mut dyn SourceSink) {
    if let Some(data) = &payload.image {
        debug!("ingesting dropped inline image ({} bytes)", data.len());
        sink.add_image(data);
    }
    for uri in &payload.uris {
        if !uri_is_supported(uri) {
            continue;
        }
        if let Some(path) = local_path(uri) {
            debug!("ingesting dropped file {:?}", path);
            sink.add_source(path);
        }
    }
}

fn uri_is_supported(uri: &str) -> bool {
    extension_of(uri)
        .map(|ext| extension_is_supported(&ext))
        .unwrap_or(false)
}

fn extension_of(uri: &str) -> Option<String> {
    let path = match parse_url(uri) {
        Some(url) => PathBuf::from(url.path()),
        None => PathBuf::from(uri),
    };
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}

fn extension_is_supported(ext: &str) -> bool {
    image::ImageFormat::from_extension(ext).is_some() || DOCUMENT_EXTENSIONS.contains(&ext)
}

/// Parse `uri` as a URL, treating single-letter schemes as Windows
/// drive letters rather than URLs.
fn parse_url(uri: &str) -> Option<Url> {
    match Url::parse(uri) {
        Ok(url) if url.scheme().len() > 1 => Some(url),
        _ => None,
    }
}

/// Local filesystem path for `uri`, if it refers to one. Remote URLs
/// are not ingested directly.
fn local_path(uri: &str) -> Option<PathBuf> {
    match parse_url(uri) {
        Some(url) if url.scheme() == "file" => url.to_file_path().ok(),
        Some(_) => None,
        None => Some(PathBuf::from(uri)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        sources: Vec<PathBuf>,
        images: Vec<Vec<u8>>,
    }

    impl SourceSink for RecordingSink {
        fn add_source(&mut self, path: PathBuf) {
            self.sources.push(path);
        }

        fn add_image(&mut self, data: &[u8]) {
            self.images.push(data.to_vec());
        }
    }

    fn payload(uris: &[&str]) -> DragPayload {
        DragPayload {
            uris: uris.iter().map(|s| s.to_string()).collect(),
            image: None,
        }
    }

    #[test]
    fn test_accepts_raster_and_document_files() {
        assert!(is_acceptable(&payload(&["file:///tmp/scan.png"])));
        assert!(is_acceptable(&payload(&["file:///tmp/scan.JPG"])));
        assert!(is_acceptable(&payload(&["file:///tmp/book.pdf"])));
        assert!(is_acceptable(&payload(&["file:///tmp/book.djvu"])));
    }

    #[test]
    fn test_rejects_unsupported_files() {
        assert!(!is_acceptable(&payload(&["file:///tmp/notes.txt"])));
        assert!(!is_acceptable(&payload(&["file:///tmp/noext"])));
        assert!(!is_acceptable(&payload(&[])));
    }

    #[test]
    fn test_accepts_inline_image_data() {
        let payload = DragPayload {
            uris: Vec::new(),
            image: Some(vec![0x89, 0x50, 0x4e, 0x47]),
        };
        assert!(is_acceptable(&payload));
    }

    #[test]
    fn test_one_supported_uri_is_enough() {
        assert!(is_acceptable(&payload(&[
            "file:///tmp/notes.txt",
            "file:///tmp/scan.tiff"
        ])));
    }

    #[test]
    fn test_drop_ingests_only_local_supported_files() {
        let mut sink = RecordingSink::default();
        handle_drop(
            &payload(&[
                "file:///tmp/a.png",
                "https://example.com/b.png",
                "file:///tmp/c.txt",
            ]),
            &mut sink,
        );
        assert_eq!(sink.sources, vec![PathBuf::from("/tmp/a.png")]);
        assert!(sink.images.is_empty());
    }

    #[test]
    fn test_drop_accepts_plain_paths() {
        let mut sink = RecordingSink::default();
        handle_drop(&payload(&["pages/scan.jpeg"]), &mut sink);
        assert_eq!(sink.sources, vec![PathBuf::from("pages/scan.jpeg")]);
    }

    #[test]
    fn test_drop_accepts_windows_drive_paths() {
        let uri = r"C:\scans\page.png";
        assert!(is_acceptable(&payload(&[uri])));

        let mut sink = RecordingSink::default();
        handle_drop(&payload(&[uri]), &mut sink);
        assert_eq!(sink.sources, vec![PathBuf::from(uri)]);
    }

    #[test]
    fn test_drop_ingests_inline_image_data() {
        let data = vec![0x89, 0x50, 0x4e, 0x47];
        let payload = DragPayload {
            uris: Vec::new(),
            image: Some(data.clone()),
        };
        assert!(is_acceptable(&payload));

        let mut sink = RecordingSink::default();
        handle_drop(&payload, &mut sink);
        assert_eq!(sink.images, vec![data]);
        assert!(sink.sources.is_empty());
    }
}
