//! OCR error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("failed to initialize OCR engine: {0}")]
    EngineInitFailed(String),
}

pub type Result<T> = std::result::Result<T, OcrError>;
