// src/codec/cell.rs

//! The 6-dot Braille cell.
//!
//! A cell is written as six symbols, row-major over a grid of three rows and
//! two columns:
//!
//! ```text
//!  symbol index      dot number
//!    0  1              1  4
//!    2  3              2  5
//!    4  5              3  6
//! ```
//!
//! so `"O.O..."` raises dots 1 and 2 (the letter `b`).

use bitvec::prelude::*;
use std::fmt;

/// Symbol for a raised dot.
pub const RAISED: char = 'O';
/// Symbol for a flat (absent) dot.
pub const FLAT: char = '.';
/// Number of symbols in one cell.
pub const CELL_WIDTH: usize = 6;

/// Dot number (1-based) for each symbol index.
const DOT_OF_INDEX: [u8; CELL_WIDTH] = [1, 4, 2, 5, 3, 6];

const MASK: u8 = 0b0011_1111;

/// One Braille cell. Bit `i` of the mask is symbol `i` of the written form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell(u8);

/// Marks the next letter as upper case.
pub const CAPITALIZE: Cell = Cell::from_pattern(b".....O");
/// Opens numeric mode.
pub const NUMBER_SIGN: Cell = Cell::from_pattern(b"....OO");
/// Closes numeric mode before a letter in `a`..=`j`.
pub const LETTER_SIGN: Cell = Cell::from_pattern(b"...O.O");
/// Emitted by the encoder for characters outside the alphabet.
pub const UNKNOWN: Cell = Cell::from_pattern(b"OOOOOO");

impl Cell {
    /// The all-flat cell.
    pub const BLANK: Cell = Cell(0);

    /// Builds a cell from a literal pattern at compile time.
    ///
    /// Panics (at compile time when used in a `const`) if the pattern holds
    /// anything other than [`RAISED`] or [`FLAT`].
    pub const fn from_pattern(pattern: &[u8; CELL_WIDTH]) -> Cell {
        let mut bits = 0u8;
        let mut i = 0;
        while i < CELL_WIDTH {
            match pattern[i] {
                b'O' => bits |= 1 << i,
                b'.' => {}
                _ => panic!("cell pattern must use only 'O' and '.'"),
            }
            i += 1;
        }
        Cell(bits)
    }

    /// Parses exactly six symbols. Returns `None` for any other length or
    /// for a symbol outside the two-symbol alphabet.
    pub fn from_symbols(symbols: &str) -> Option<Cell> {
        let mut bits = 0u8;
        let mut count = 0;
        for ch in symbols.chars() {
            if count == CELL_WIDTH {
                return None;
            }
            match ch {
                RAISED => bits.view_bits_mut::<Lsb0>().set(count, true),
                FLAT => {}
                _ => return None,
            }
            count += 1;
        }
        (count == CELL_WIDTH).then_some(Cell(bits))
    }

    /// Builds a cell from standard Braille dot numbers (1 to 6). Out-of-range
    /// dot numbers are ignored.
    pub fn from_dots(dots: &[u8]) -> Cell {
        let mut bits = 0u8;
        for &dot in dots {
            if let Some(index) = DOT_OF_INDEX.iter().position(|&d| d == dot) {
                bits.view_bits_mut::<Lsb0>().set(index, true);
            }
        }
        Cell(bits)
    }

    /// Raw 6-bit mask.
    pub const fn bits(self) -> u8 {
        self.0 & MASK
    }

    /// Whether the symbol at `index` (0..6, row-major) is raised.
    pub fn is_raised(self, index: usize) -> bool {
        index < CELL_WIDTH && self.0.view_bits::<Lsb0>()[index]
    }

    /// Raised dots as standard dot numbers, ascending.
    pub fn raised_dots(self) -> Vec<u8> {
        let mut dots: Vec<u8> = self.0.view_bits::<Lsb0>()[..CELL_WIDTH]
            .iter_ones()
            .map(|index| DOT_OF_INDEX[index])
            .collect();
        dots.sort_unstable();
        dots
    }

    /// Symbols of this cell, in written order.
    pub fn symbols(self) -> [char; CELL_WIDTH] {
        let mut out = [FLAT; CELL_WIDTH];
        for index in self.0.view_bits::<Lsb0>()[..CELL_WIDTH].iter_ones() {
            out[index] = RAISED;
        }
        out
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Whether `ch` is one of the two cell symbols.
pub fn is_symbol(ch: char) -> bool {
    ch == RAISED || ch == FLAT
}

/// Concatenates cells into their written form.
pub fn cells_to_string(cells: &[Cell]) -> String {
    let mut out = String::with_capacity(cells.len() * CELL_WIDTH);
    for cell in cells {
        out.extend(cell.symbols());
    }
    out
}
