// src/codec/encoder.rs

use super::NumericPolicy;
use super::alphabet::{AlphabetTable, digit_for_letter};
use super::cell::{CAPITALIZE, Cell, LETTER_SIGN, NUMBER_SIGN, UNKNOWN, cells_to_string};
use log::debug;

/// Text to cell encoder.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    table: &'static AlphabetTable,
    policy: NumericPolicy,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(NumericPolicy::default())
    }
}

impl Encoder {
    pub fn new(policy: NumericPolicy) -> Self {
        Self {
            table: AlphabetTable::global(),
            policy,
        }
    }

    /// Encodes `text` one character at a time. Never fails: characters the
    /// table does not know become [`UNKNOWN`].
    pub fn encode(&self, text: &str) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(text.len() + text.len() / 4);
        let mut numeric = false;

        for ch in text.chars() {
            if ch.is_ascii_uppercase() {
                cells.push(CAPITALIZE);
                cells.push(self.lookup(ch.to_ascii_lowercase()));
                numeric = false;
            } else if ch.is_ascii_digit() {
                if !numeric {
                    cells.push(NUMBER_SIGN);
                    numeric = self.policy == NumericPolicy::UntilTerminator;
                }
                cells.push(self.lookup(ch));
            } else {
                // An open run would read a following a..j back as a digit.
                if numeric && digit_for_letter(ch).is_some() {
                    cells.push(LETTER_SIGN);
                }
                cells.push(self.lookup(ch));
                numeric = false;
            }
        }

        debug!(
            "encoded {} chars into {} cells",
            text.chars().count(),
            cells.len()
        );
        cells
    }

    /// Encodes `text` straight to its written symbol form.
    pub fn encode_to_string(&self, text: &str) -> String {
        cells_to_string(&self.encode(text))
    }

    fn lookup(&self, ch: char) -> Cell {
        self.table.cell_of(ch).unwrap_or(UNKNOWN)
    }
}
