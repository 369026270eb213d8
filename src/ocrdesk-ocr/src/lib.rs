//! ocrdesk-ocr - scoped OCR engine ownership for the ocrdesk front-end
//!
//! The recognition engine itself is a third-party dependency consumed
//! through [`OcrBackend`]; this crate only guarantees its lifecycle:
//! one instance, initialized once, released exactly once.

pub mod engine;
pub mod error;

pub use engine::{EngineHandle, OcrBackend};
pub use error::{OcrError, Result};
