//! ocrdesk-ui - toolkit-facing helpers for the ocrdesk front-end
//!
//! Modal message dialogs and drag-and-drop payload handling.

pub mod dialogs;
pub mod dragdrop;

pub use dialogs::{confirm, DialogButtons, DialogChoice, DialogIcon};
pub use dragdrop::{handle_drop, is_acceptable, DragPayload, SourceSink};
