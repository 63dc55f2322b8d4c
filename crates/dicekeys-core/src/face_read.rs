//! Face reads emitted by the optical pipeline.
//!
//! The reader produces one JSON record per die, in row-major order. Each
//! record carries OCR candidates for the letter and digit (most likely first)
//! and, when it could be determined, the face's orientation. Geometry fields
//! (center, underline, overline) are present on the wire but not needed here,
//! so they are ignored on decode.

use serde::Deserialize;

use crate::{
    dice_key::DiceKey,
    error::DiceKeyError,
    face::{Face, FaceDigit, FaceLetter, Orientation},
};

/// One die as read by the optical pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceRead {
    /// Orientation, if the reader could determine it
    #[serde(default)]
    pub orientation_as_lowercase_letter_trbl: Option<Orientation>,
    /// Letter candidates ordered from most to least likely
    pub ocr_letter_chars_from_most_to_least_likely: String,
    /// Digit candidates ordered from most to least likely
    pub ocr_digit_chars_from_most_to_least_likely: String,
}

impl FaceRead {
    /// Most likely valid letter.
    pub fn letter(&self) -> Result<FaceLetter, DiceKeyError> {
        self.ocr_letter_chars_from_most_to_least_likely
            .chars()
            .find_map(|c| FaceLetter::from_char(c).ok())
            .ok_or_else(|| {
                DiceKeyError::UnreadableLetter(self.ocr_letter_chars_from_most_to_least_likely.clone())
            })
    }

    /// Most likely valid digit.
    pub fn digit(&self) -> Result<FaceDigit, DiceKeyError> {
        self.ocr_digit_chars_from_most_to_least_likely
            .chars()
            .find_map(|c| FaceDigit::from_char(c).ok())
            .ok_or_else(|| {
                DiceKeyError::UnreadableDigit(self.ocr_digit_chars_from_most_to_least_likely.clone())
            })
    }

    /// Convert to a face. A missing orientation is treated as `Top`.
    pub fn to_face(&self) -> Result<Face, DiceKeyError> {
        Ok(Face::new(
            self.letter()?,
            self.digit()?,
            self.orientation_as_lowercase_letter_trbl.unwrap_or_default(),
        ))
    }
}

impl DiceKey {
    /// Build a DiceKey from 25 face reads in row-major order.
    ///
    /// # Errors
    ///
    /// - `DiceKeyError::InvalidDie` if any read has no usable letter or digit
    /// - `DiceKeyError::WrongFaceCount` unless exactly 25 reads are given
    pub fn from_face_reads(reads: &[FaceRead]) -> Result<Self, DiceKeyError> {
        let faces = reads
            .iter()
            .enumerate()
            .map(|(position, read)| read.to_face().map_err(|err| err.at(position)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_faces(&faces)
    }
}
