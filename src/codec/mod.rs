// src/codec/mod.rs

//! Text/cell codec: the alphabet table, the encoder, the decoder and the
//! classifier that picks between them.

pub mod alphabet;
pub mod cell;
pub mod classify;
pub mod decoder;
pub mod encoder;

pub use alphabet::AlphabetTable;
pub use cell::{CAPITALIZE, Cell, FLAT, LETTER_SIGN, NUMBER_SIGN, RAISED, UNKNOWN, cells_to_string};
pub use classify::looks_like_braille_stream;
pub use decoder::{DecodeIssue, DecodeIssueKind, Decoded, Decoder, Mode};
pub use encoder::Encoder;

/// How long numeric mode stays open once a number sign is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPolicy {
    /// One number sign covers a whole digit run. The run ends at a space,
    /// a capital or letter sign, an unreadable cell, or any cell that is not
    /// digit-shaped.
    #[default]
    UntilTerminator,
    /// Every digit carries its own number sign.
    SingleDigit,
}
