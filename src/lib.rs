//! # Braille Codec Library
//!
//! Bidirectional translation between plain text and 6-dot Braille cells
//! written as strings of `O` (raised) and `.` (flat), six symbols per cell.
//!
//! This library is organized into several modules:
//! - `utils`: error handling
//! - `codec`: the alphabet table, encoder, decoder and stream classifier
//! - `render`: glyph rendering of cells
//! - `translate`: auto-detecting front end used by the `braille` binary

// Re-export commonly used types at the crate root
pub use utils::error::{BrailleError, Result};

pub mod utils {
    pub mod error;
}

pub mod codec;
pub mod render;
pub mod translate;

// Public API exports
pub use codec::{Cell, Decoded, Decoder, Encoder, NumericPolicy, looks_like_braille_stream};
pub use render::{RenderOptions, render_cells};
pub use translate::{Direction, Translation, Translator, TranslatorConfig, write_translation};

/// Encodes `text` to its written cell stream with the default policy.
pub fn encode(text: &str) -> String {
    Encoder::default().encode_to_string(text)
}

/// Decodes a written cell stream with the default policy.
pub fn decode(stream: &str) -> String {
    Decoder::default().decode(stream)
}

/// Translates `input` in whichever direction it looks like it needs.
pub fn translate(input: &str) -> Result<Translation> {
    Translator::default().translate(input)
}
