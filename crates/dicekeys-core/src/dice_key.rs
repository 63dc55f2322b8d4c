//! DiceKey grid and rotation-invariant canonicalization.
//!
//! A reading of a DiceKey depends on which corner the reader treated as the
//! top-left. The canonical form picks, among the four rotations of a reading,
//! the one whose human-readable form sorts first. The seed is that form.
//!
//! # Invariants
//!
//! - Exactly [`NUMBER_OF_FACES`] faces, row-major over a 5x5 grid.
//! - Rotation moves faces by [`CLOCKWISE_90_DEGREE_ROTATION`] and advances
//!   each face's orientation one step.
//! - On an exact tie between rotations, the earliest rotation wins. Changing
//!   this changes which rotation is returned, though not the seed string.

use std::{fmt, str::FromStr};

use crate::{
    error::DiceKeyError,
    face::{Face, FaceDigit, FaceLetter, Orientation},
};

/// Number of dice in a DiceKey
pub const NUMBER_OF_FACES: usize = 25;

/// Position map for a 90° clockwise turn of the 5x5 grid.
///
/// After rotating, the face at index `i` is the face that was at index
/// `CLOCKWISE_90_DEGREE_ROTATION[i]` before rotating.
pub const CLOCKWISE_90_DEGREE_ROTATION: [usize; NUMBER_OF_FACES] = [
    20, 15, 10, 5, 0, //
    21, 16, 11, 6, 1, //
    22, 17, 12, 7, 2, //
    23, 18, 13, 8, 3, //
    24, 19, 14, 9, 4,
];

/// Grid positions of the four corners, clockwise from the top-left.
const CORNER_POSITIONS: [usize; 4] = [0, 4, 24, 20];

/// A 5x5 grid of die faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceKey {
    faces: [Face; NUMBER_OF_FACES],
}

impl DiceKey {
    /// Create a DiceKey from exactly 25 faces.
    #[must_use]
    pub const fn new(faces: [Face; NUMBER_OF_FACES]) -> Self {
        Self { faces }
    }

    /// Create a DiceKey from a slice of faces.
    ///
    /// # Errors
    ///
    /// - `DiceKeyError::WrongFaceCount` unless the slice has exactly 25 faces
    pub fn from_faces(faces: &[Face]) -> Result<Self, DiceKeyError> {
        let faces: [Face; NUMBER_OF_FACES] = faces.try_into().map_err(|_| {
            DiceKeyError::WrongFaceCount { expected: NUMBER_OF_FACES, actual: faces.len() }
        })?;
        Ok(Self { faces })
    }

    /// Parse a human-readable form.
    ///
    /// Accepts the 50-character form (letter, digit per die) and the
    /// 75-character form (letter, digit, orientation per die). Faces parsed
    /// from the 50-character form are oriented `Top`.
    ///
    /// # Errors
    ///
    /// - `DiceKeyError::InvalidHumanReadableLength` for any other length
    /// - `DiceKeyError::InvalidDie` naming the die whose character is invalid
    pub fn from_human_readable_form(text: &str) -> Result<Self, DiceKeyError> {
        let chars: Vec<char> = text.chars().collect();
        let width = match chars.len() {
            50 => 2,
            75 => 3,
            other => return Err(DiceKeyError::InvalidHumanReadableLength(other)),
        };

        let faces = chars
            .chunks_exact(width)
            .enumerate()
            .map(|(position, die)| parse_die(die).map_err(|err| err.at(position)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_faces(&faces)
    }

    /// Faces in row-major order.
    #[must_use]
    pub const fn faces(&self) -> &[Face; NUMBER_OF_FACES] {
        &self.faces
    }

    /// Copy of this key with every orientation set to `Top`.
    #[must_use]
    pub fn without_orientations(&self) -> Self {
        Self { faces: self.faces.map(Face::without_orientation) }
    }

    /// Copy of this key turned 90° clockwise.
    #[must_use]
    pub fn rotated_clockwise_90_degrees(&self) -> Self {
        Self { faces: CLOCKWISE_90_DEGREE_ROTATION.map(|from| self.faces[from].rotated90()) }
    }

    /// Concatenated letter, digit (and orientation) of each die in index
    /// order.
    ///
    /// This string is both the canonicalization sort key and the seed.
    #[must_use]
    pub fn to_human_readable_form(&self, include_orientations: bool) -> String {
        let width = if include_orientations { 3 } else { 2 };
        let mut out = String::with_capacity(NUMBER_OF_FACES * width);
        for face in &self.faces {
            face.write_human_readable(&mut out, include_orientations);
        }
        out
    }

    /// Rotation of this key whose human-readable form sorts first.
    ///
    /// Evaluates the key as read plus its three further 90° rotations. Only
    /// a strictly smaller form replaces the current best, so ties keep the
    /// earliest rotation.
    #[must_use]
    pub fn rotated_to_canonical_form(&self, include_orientations: bool) -> Self {
        let mut candidate = *self;
        let mut canonical = *self;
        let mut earliest_form = canonical.to_human_readable_form(include_orientations);

        for _ in 1..4 {
            candidate = candidate.rotated_clockwise_90_degrees();
            let form = candidate.to_human_readable_form(include_orientations);
            if form < earliest_form {
                earliest_form = form;
                canonical = candidate;
            }
        }

        canonical
    }

    /// Seed string: the human-readable form of the canonical rotation.
    ///
    /// Every rotation of the same physical key yields the same seed.
    #[must_use]
    pub fn to_seed(&self, include_orientations: bool) -> String {
        self.rotated_to_canonical_form(include_orientations)
            .to_human_readable_form(include_orientations)
    }

    /// Letters at the four corners, clockwise from the top-left as read.
    ///
    /// Matches the `cornerLetters` seed hint in derivation options.
    #[must_use]
    pub fn corner_letters(&self) -> String {
        CORNER_POSITIONS.iter().map(|&i| self.faces[i].letter.as_char()).collect()
    }
}

impl fmt::Display for DiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_human_readable_form(true))
    }
}

impl FromStr for DiceKey {
    type Err = DiceKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_human_readable_form(s)
    }
}

fn parse_die(die: &[char]) -> Result<Face, DiceKeyError> {
    let letter = FaceLetter::from_char(die[0])?;
    let digit = FaceDigit::from_char(die[1])?;
    let orientation = match die.get(2) {
        Some(&c) => Orientation::from_char(c)?,
        None => Orientation::Top,
    };
    Ok(Face::new(letter, digit, orientation))
}
