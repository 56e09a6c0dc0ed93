// src/codec/alphabet.rs

//! Character to cell table.
//!
//! The digits `1`..=`9` and `0` deliberately share the cells of the letters
//! `a`..=`j`. The reverse lookup therefore always yields the letter; the
//! decoder turns it back into a digit only while numeric mode is active.

use super::cell::{CAPITALIZE, Cell, LETTER_SIGN, NUMBER_SIGN, UNKNOWN};
use std::collections::HashMap;
use std::sync::OnceLock;

const LETTERS: [(char, &[u8; 6]); 26] = [
    ('a', b"O....."),
    ('b', b"O.O..."),
    ('c', b"OO...."),
    ('d', b"OO.O.."),
    ('e', b"O..O.."),
    ('f', b"OOO..."),
    ('g', b"OOOO.."),
    ('h', b"O.OO.."),
    ('i', b".OO..."),
    ('j', b".OOO.."),
    ('k', b"O...O."),
    ('l', b"O.O.O."),
    ('m', b"OO..O."),
    ('n', b"OO.OO."),
    ('o', b"O..OO."),
    ('p', b"OOO.O."),
    ('q', b"OOOOO."),
    ('r', b"O.OOO."),
    ('s', b".OO.O."),
    ('t', b".OOOO."),
    ('u', b"O...OO"),
    ('v', b"O.O.OO"),
    ('w', b".OOO.O"),
    ('x', b"OO..OO"),
    ('y', b"OO.OOO"),
    ('z', b"O..OOO"),
];

/// Supported punctuation, plus the space.
const SYMBOLS: [(char, &[u8; 6]); 7] = [
    (' ', b"......"),
    (',', b"..O..."),
    (';', b"..OO.."),
    (':', b"...O.."),
    ('.', b"...OO."),
    ('!', b"..OOO."),
    ('?', b"..O.O."),
];

/// Digits in the order of the letters they alias: `1` is `a`, `0` is `j`.
const DIGITS: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

/// Immutable bidirectional character/cell table.
#[derive(Debug)]
pub struct AlphabetTable {
    forward: HashMap<char, Cell>,
    reverse: HashMap<Cell, char>,
}

static ALPHABET: OnceLock<AlphabetTable> = OnceLock::new();

impl AlphabetTable {
    /// The process-wide table, built on first use.
    pub fn global() -> &'static AlphabetTable {
        ALPHABET.get_or_init(AlphabetTable::build)
    }

    fn build() -> Self {
        let mut forward = HashMap::with_capacity(LETTERS.len() + SYMBOLS.len() + DIGITS.len());
        for &(ch, pattern) in LETTERS.iter().chain(SYMBOLS.iter()) {
            forward.insert(ch, Cell::from_pattern(pattern));
        }
        for (digit, &(letter, _)) in DIGITS.iter().zip(LETTERS.iter()) {
            let cell = forward[&letter];
            forward.insert(*digit, cell);
        }

        // Inverting only letters and symbols keeps aliased cells on the letter.
        let mut reverse = HashMap::with_capacity(LETTERS.len() + SYMBOLS.len());
        for &(ch, pattern) in LETTERS.iter().chain(SYMBOLS.iter()) {
            reverse.insert(Cell::from_pattern(pattern), ch);
        }

        debug_assert_eq!(reverse.len(), LETTERS.len() + SYMBOLS.len());
        debug_assert!(
            [CAPITALIZE, NUMBER_SIGN, LETTER_SIGN, UNKNOWN]
                .iter()
                .all(|cell| !reverse.contains_key(cell))
        );

        Self { forward, reverse }
    }

    /// Cell for a lowercase letter, digit, space or supported punctuation.
    pub fn cell_of(&self, ch: char) -> Option<Cell> {
        self.forward.get(&ch).copied()
    }

    /// Character for a cell. Digit-shaped cells resolve to their letter.
    pub fn char_of(&self, cell: Cell) -> Option<char> {
        self.reverse.get(&cell).copied()
    }

    /// Whether the encoder can represent `ch` without the unknown sentinel.
    pub fn supports(&self, ch: char) -> bool {
        self.forward.contains_key(&ch.to_ascii_lowercase())
    }

    /// Number of distinct characters in the forward table.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Digit read from a letter-shaped cell in numeric mode: `a` is `1`, `j` is `0`.
pub fn digit_for_letter(letter: char) -> Option<char> {
    LETTERS[..DIGITS.len()]
        .iter()
        .position(|&(l, _)| l == letter)
        .map(|index| DIGITS[index])
}

/// Letter whose cell a digit borrows.
pub fn letter_for_digit(digit: char) -> Option<char> {
    DIGITS
        .iter()
        .position(|&d| d == digit)
        .map(|index| LETTERS[index].0)
}
