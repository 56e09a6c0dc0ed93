use std::io;
use thiserror::Error;

/// Main error type for the Braille codec.
///
/// Unreadable cells and truncated streams are not errors: the decoder
/// replaces them and reports them as [`crate::codec::DecodeIssue`]s.
#[derive(Error, Debug)]
pub enum BrailleError {
    /// Nothing to translate
    #[error("Empty input: nothing to translate")]
    EmptyInput,
    /// Input is neither a cell stream nor supported text
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for codec operations.
pub type Result<T> = std::result::Result<T, BrailleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        assert_eq!(
            BrailleError::Io(io_error).to_string(),
            "I/O error: file not found"
        );

        assert_eq!(
            BrailleError::EmptyInput.to_string(),
            "Empty input: nothing to translate"
        );

        assert_eq!(
            BrailleError::InvalidCharacter {
                character: '#',
                position: 3
            }
            .to_string(),
            "Invalid character '#' at position 3"
        );
    }
}
