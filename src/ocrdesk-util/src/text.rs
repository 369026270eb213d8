//! Text normalization helpers

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Remove combining diacritical marks, keeping base characters.
///
/// Decomposes to NFD, drops the combining marks and recomposes, so
/// precomposed characters like `é` reduce to their base letter. The
/// result is stable under repeated application.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}
