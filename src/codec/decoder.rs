// src/codec/decoder.rs

//! Cell to text decoder.
//!
//! Decoding never fails. Cells that resolve to nothing and a trailing chunk
//! shorter than a cell each come out as `?`, and are reported as
//! [`DecodeIssue`]s by [`Decoder::decode_report`].

use super::NumericPolicy;
use super::alphabet::{AlphabetTable, digit_for_letter};
use super::cell::{CAPITALIZE, CELL_WIDTH, Cell, LETTER_SIGN, NUMBER_SIGN};
use log::{debug, warn};
use std::fmt;

/// Output for any cell or chunk that cannot be read.
pub const REPLACEMENT: char = '?';

/// Decoder state carried from one cell to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mode {
    pub numeric: bool,
    pub capitalize_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeIssueKind {
    /// A full chunk that matches no table entry or reserved cell.
    UnresolvedCell,
    /// Fewer than six symbols left at the end of the stream.
    TruncatedStream,
}

/// A recovered problem, located by symbol offset (whitespace excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeIssue {
    pub kind: DecodeIssueKind,
    pub offset: usize,
}

impl fmt::Display for DecodeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DecodeIssueKind::UnresolvedCell => {
                write!(f, "unresolved cell at symbol {}", self.offset)
            }
            DecodeIssueKind::TruncatedStream => {
                write!(f, "truncated cell at symbol {}", self.offset)
            }
        }
    }
}

/// Decoded text together with everything that had to be replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub issues: Vec<DecodeIssue>,
}

impl Decoded {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    table: &'static AlphabetTable,
    policy: NumericPolicy,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(NumericPolicy::default())
    }
}

impl Decoder {
    pub fn new(policy: NumericPolicy) -> Self {
        Self {
            table: AlphabetTable::global(),
            policy,
        }
    }

    /// Decodes a written symbol stream, discarding diagnostics.
    pub fn decode(&self, stream: &str) -> String {
        self.decode_report(stream).text
    }

    /// Decodes a written symbol stream. Whitespace is skipped, the rest is
    /// cut into consecutive 6-symbol chunks from offset 0.
    pub fn decode_report(&self, stream: &str) -> Decoded {
        let symbols: Vec<char> = stream.chars().filter(|c| !c.is_whitespace()).collect();
        let mut state = DecodeState::new(self, symbols.len() / CELL_WIDTH + 1);

        for (index, chunk) in symbols.chunks(CELL_WIDTH).enumerate() {
            let offset = index * CELL_WIDTH;
            if chunk.len() < CELL_WIDTH {
                state.truncated(offset);
                break;
            }
            let written: String = chunk.iter().collect();
            match Cell::from_symbols(&written) {
                Some(cell) => state.feed(cell, offset),
                None => state.unresolved(offset),
            }
        }

        state.finish(symbols.len())
    }

    /// Decodes cells that are already split.
    pub fn decode_cells(&self, cells: &[Cell]) -> Decoded {
        let mut state = DecodeState::new(self, cells.len());
        for (index, &cell) in cells.iter().enumerate() {
            state.feed(cell, index * CELL_WIDTH);
        }
        state.finish(cells.len() * CELL_WIDTH)
    }
}

struct DecodeState<'a> {
    decoder: &'a Decoder,
    mode: Mode,
    out: Decoded,
}

impl<'a> DecodeState<'a> {
    fn new(decoder: &'a Decoder, capacity: usize) -> Self {
        Self {
            decoder,
            mode: Mode::default(),
            out: Decoded {
                text: String::with_capacity(capacity),
                issues: Vec::new(),
            },
        }
    }

    fn feed(&mut self, cell: Cell, offset: usize) {
        match cell {
            CAPITALIZE => {
                self.mode.capitalize_next = true;
                self.mode.numeric = false;
            }
            NUMBER_SIGN => self.mode.numeric = true,
            LETTER_SIGN => self.mode.numeric = false,
            _ => match self.decoder.table.char_of(cell) {
                None => self.unresolved(offset),
                Some(' ') => {
                    self.mode.numeric = false;
                    self.emit(' ');
                }
                Some(ch) if self.mode.numeric => match digit_for_letter(ch) {
                    Some(digit) => {
                        // A digit has no case but still uses up a pending capital.
                        self.emit(digit);
                        if self.decoder.policy == NumericPolicy::SingleDigit {
                            self.mode.numeric = false;
                        }
                    }
                    None => {
                        self.mode.numeric = false;
                        self.emit(ch);
                    }
                },
                Some(ch) => self.emit(ch),
            },
        }
    }

    fn emit(&mut self, ch: char) {
        if self.mode.capitalize_next {
            self.out.text.push(ch.to_ascii_uppercase());
            self.mode.capitalize_next = false;
        } else {
            self.out.text.push(ch);
        }
    }

    fn unresolved(&mut self, offset: usize) {
        self.out.text.push(REPLACEMENT);
        self.mode.numeric = false;
        self.report(DecodeIssueKind::UnresolvedCell, offset);
    }

    fn truncated(&mut self, offset: usize) {
        self.out.text.push(REPLACEMENT);
        self.report(DecodeIssueKind::TruncatedStream, offset);
    }

    fn report(&mut self, kind: DecodeIssueKind, offset: usize) {
        let issue = DecodeIssue { kind, offset };
        warn!("decode: {}", issue);
        self.out.issues.push(issue);
    }

    fn finish(self, symbols: usize) -> Decoded {
        debug!(
            "decoded {} symbols into {} chars ({} issues)",
            symbols,
            self.out.text.chars().count(),
            self.out.issues.len()
        );
        self.out
    }
}
