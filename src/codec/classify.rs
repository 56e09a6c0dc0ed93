// src/codec/classify.rs

use super::cell::is_symbol;

/// Whether `input` should be read as a cell stream rather than text.
///
/// Whitespace is ignored, matching the decoder, which skips it between
/// symbols. An empty or all-whitespace input counts as a stream.
pub fn looks_like_braille_stream(input: &str) -> bool {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .all(is_symbol)
}
