//! Scoped ownership of a third-party OCR engine instance

use crate::error::Result;
use tracing::debug;

/// Seam to the third-party recognition engine.
///
/// One value maps to one underlying engine instance. `init` is called
/// exactly once before any other use; `release` exactly once after a
/// successful `init`. A failed `init` must leave no engine resources
/// allocated.
pub trait OcrBackend {
    /// Initialize the engine, optionally for a specific language tag.
    /// The language cannot be changed after initialization.
    fn init(&mut self, language: Option<&str>) -> Result<()>;

    /// Tear the engine down.
    fn release(&mut self);
}

/// Scoped owner of exactly one initialized OCR backend.
///
/// The backend is released when the handle is dropped, on every exit
/// path. Ownership is never shared or transferred.
pub struct EngineHandle<B: OcrBackend> {
    backend: B,
}

impl<B: OcrBackend> EngineHandle<B> {
    /// Initialize `backend` for `language` and take ownership of it.
    ///
    /// On failure the un-initialized backend is dropped without a
    /// `release` call.
    pub fn new(mut backend: B, language: Option<&str>) -> Result<Self> {
        debug!("initializing OCR engine (language: {:?})", language);
        backend.init(language)?;
        Ok(Self { backend })
    }

    /// Non-owning view of the engine, valid for the handle's lifetime.
    pub fn get(&self) -> &B {
        &self.backend
    }

    pub fn get_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: OcrBackend> Drop for EngineHandle<B> {
    fn drop(&mut self) {
        debug!("releasing OCR engine");
        self.backend.release();
    }
}
