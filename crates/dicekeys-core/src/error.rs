//! Error types for DiceKey construction and parsing.

use thiserror::Error;

/// Errors that can occur while building a DiceKey from untrusted input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceKeyError {
    /// A DiceKey was built from the wrong number of faces
    #[error("a DiceKey has exactly {expected} faces, got {actual}")]
    WrongFaceCount {
        /// Required face count
        expected: usize,
        /// Number of faces supplied
        actual: usize,
    },

    /// Character is not a letter that appears on a die
    #[error("invalid face letter {0:?}")]
    InvalidLetter(char),

    /// Character is not a digit between 1 and 6
    #[error("invalid face digit {0:?}")]
    InvalidDigit(char),

    /// Character is not one of `t`, `r`, `b`, `l`
    #[error("invalid orientation {0:?}")]
    InvalidOrientation(char),

    /// Human-readable form has neither 50 nor 75 characters
    #[error("human-readable form must have 50 or 75 characters, got {0}")]
    InvalidHumanReadableLength(usize),

    /// Invalid character at a specific die position in a human-readable form
    #[error("die {position}: {source}")]
    InvalidDie {
        /// Die index (0..25) in row-major order
        position: usize,
        /// Underlying character error
        #[source]
        source: Box<DiceKeyError>,
    },

    /// No OCR candidate for the letter was a valid face letter
    #[error("no readable letter among OCR candidates {0:?}")]
    UnreadableLetter(String),

    /// No OCR candidate for the digit was a valid face digit
    #[error("no readable digit among OCR candidates {0:?}")]
    UnreadableDigit(String),
}

impl DiceKeyError {
    /// Attach the die position to a character-level error.
    pub(crate) fn at(self, position: usize) -> Self {
        Self::InvalidDie { position, source: Box::new(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_position_wraps_source() {
        let err = DiceKeyError::InvalidLetter('E').at(7);

        assert_eq!(err.to_string(), "die 7: invalid face letter 'E'");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn wrong_face_count_message() {
        let err = DiceKeyError::WrongFaceCount { expected: 25, actual: 24 };
        assert_eq!(err.to_string(), "a DiceKey has exactly 25 faces, got 24");
    }
}
