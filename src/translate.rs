// src/translate.rs

//! Auto-detecting front end over the codec.

use crate::codec::cell::CELL_WIDTH;
use crate::codec::{
    AlphabetTable, Cell, DecodeIssue, Decoder, Encoder, NumericPolicy, cells_to_string,
    looks_like_braille_stream,
};
use crate::render::{RenderOptions, render_cells};
use crate::utils::error::{BrailleError, Result};
use log::debug;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Text in, cell stream out.
    ToBraille,
    /// Cell stream in, text out.
    ToText,
}

#[derive(Debug, Clone, Copy)]
pub struct TranslatorConfig {
    pub numeric_policy: NumericPolicy,
    /// Reject text containing characters the alphabet cannot represent,
    /// instead of encoding them as the unknown cell.
    pub strict: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            numeric_policy: NumericPolicy::default(),
            strict: true,
        }
    }
}

/// Result of one translation. `cells` is the encoded output for
/// [`Direction::ToBraille`] and the parsed input for [`Direction::ToText`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub direction: Direction,
    pub output: String,
    pub cells: Vec<Cell>,
    pub issues: Vec<DecodeIssue>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    config: TranslatorConfig,
    encoder: Encoder,
    decoder: Decoder,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            config,
            encoder: Encoder::new(config.numeric_policy),
            decoder: Decoder::new(config.numeric_policy),
        }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translates `input` in whichever direction the classifier picks.
    pub fn translate(&self, input: &str) -> Result<Translation> {
        if input.trim().is_empty() {
            return Err(BrailleError::EmptyInput);
        }

        if looks_like_braille_stream(input) {
            debug!("translating {} symbols to text", input.len());
            let cells = parse_cells(input);
            let decoded = self.decoder.decode_report(input);
            return Ok(Translation {
                direction: Direction::ToText,
                output: decoded.text,
                cells,
                issues: decoded.issues,
            });
        }

        if self.config.strict {
            validate_text(input)?;
        }
        debug!("translating {} chars to braille", input.chars().count());
        let cells = self.encoder.encode(input);
        Ok(Translation {
            direction: Direction::ToBraille,
            output: cells_to_string(&cells),
            cells,
            issues: Vec::new(),
        })
    }

    /// Translates every input independently, in parallel when the `rayon`
    /// feature is enabled.
    #[cfg(feature = "rayon")]
    pub fn translate_batch<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<Result<Translation>> {
        use rayon::prelude::*;
        inputs
            .par_iter()
            .map(|input| self.translate(input.as_ref()))
            .collect()
    }

    /// Translates every input independently.
    #[cfg(not(feature = "rayon"))]
    pub fn translate_batch<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<Result<Translation>> {
        inputs
            .iter()
            .map(|input| self.translate(input.as_ref()))
            .collect()
    }
}

/// Writes the translated output line, then the glyph rendering when
/// `render` is given.
pub fn write_translation<W: Write>(
    out: &mut W,
    translation: &Translation,
    render: Option<&RenderOptions>,
) -> Result<()> {
    writeln!(out, "{}", translation.output)?;
    if let Some(options) = render {
        writeln!(out, "{}", render_cells(&translation.cells, options))?;
    }
    out.flush()?;
    Ok(())
}

/// First character the alphabet cannot represent, as an error.
pub fn validate_text(text: &str) -> Result<()> {
    let table = AlphabetTable::global();
    match text.chars().enumerate().find(|&(_, ch)| !table.supports(ch)) {
        Some((position, character)) => Err(BrailleError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Complete cells of a symbol stream, whitespace skipped. A trailing partial
/// chunk is dropped.
fn parse_cells(stream: &str) -> Vec<Cell> {
    let symbols: String = stream.chars().filter(|c| !c.is_whitespace()).collect();
    symbols
        .as_bytes()
        .chunks_exact(CELL_WIDTH)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok().and_then(Cell::from_symbols))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_goes_to_braille() {
        let translation = Translator::default().translate("Hi").unwrap();
        assert_eq!(translation.direction, Direction::ToBraille);
        assert_eq!(translation.output, ".....OO.OO...OO...");
        assert_eq!(translation.cells.len(), 3);
    }

    #[test]
    fn test_stream_goes_to_text() {
        let translation = Translator::default()
            .translate(".....OO.OO...OO...")
            .unwrap();
        assert_eq!(translation.direction, Direction::ToText);
        assert_eq!(translation.output, "Hi");
        assert_eq!(translation.cells.len(), 3);
        assert!(translation.issues.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            Translator::default().translate(""),
            Err(BrailleError::EmptyInput)
        ));
    }

    #[test]
    fn test_whitespace_only_input() {
        for input in [" ", "   ", "\t\n"] {
            assert!(matches!(
                Translator::default().translate(input),
                Err(BrailleError::EmptyInput)
            ));
        }
    }

    #[test]
    fn test_write_translation() {
        let translation = Translator::default().translate("b").unwrap();
        let options = RenderOptions {
            raised: 'O',
            flat: '.',
            cells_per_line: 0,
        };

        let mut out = Vec::new();
        write_translation(&mut out, &translation, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "O.O...\n");

        let mut out = Vec::new();
        write_translation(&mut out, &translation, Some(&options)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "O.O...\nO.\nO.\n..\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let translation = Translator::default().translate("abc").unwrap();
        match write_translation(&mut ClosedPipe, &translation, None) {
            Err(BrailleError::Io(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe)
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_rejects_unsupported() {
        match Translator::default().translate("ab#c") {
            Err(BrailleError::InvalidCharacter {
                character,
                position,
            }) => {
                assert_eq!(character, '#');
                assert_eq!(position, 2);
            }
            other => panic!("expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_lenient_uses_sentinel() {
        let translator = Translator::new(TranslatorConfig {
            strict: false,
            ..TranslatorConfig::default()
        });
        let translation = translator.translate("a#").unwrap();
        assert_eq!(translation.output, "O.....OOOOOO");
    }

    #[test]
    fn test_batch() {
        let inputs = ["abc", "", "O....."];
        let results = Translator::default().translate_batch(&inputs[..]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().output.len(), 18);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().output, "a");
    }
}
