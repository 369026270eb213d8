//! ocrdesk-util - shared helpers for the ocrdesk front-end
//!
//! Filesystem and naming helpers, text normalization, spelling-language
//! resolution, the blocking task queue, and the busy-task runner.

pub mod busy;
pub mod config;
pub mod error;
pub mod paths;
pub mod queue;
pub mod spelling;
pub mod text;

pub use busy::run_busy;
pub use config::Settings;
pub use error::{Result, UtilError};
pub use paths::{documents_folder, make_output_filename};
pub use queue::TaskQueue;
pub use spelling::SpellingDictionaries;
pub use text::strip_diacritics;
