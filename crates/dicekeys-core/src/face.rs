//! Die face model.
//!
//! Each die face carries a letter, a digit, and the orientation of the face
//! relative to the top of the grid. Faces are `Copy` values; rotating a face
//! returns a new face.
//!
//! The letter alphabet omits `E` and `Q`, which are too easily confused with
//! `F` and `O` when read optically.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DiceKeyError;

/// Letter printed on a die face
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum FaceLetter {
    A,
    B,
    C,
    D,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl FaceLetter {
    /// Every letter that appears on a die, in alphabetical order.
    pub const ALL: [Self; 24] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Parse an uppercase letter.
    pub fn from_char(c: char) -> Result<Self, DiceKeyError> {
        Self::ALL
            .into_iter()
            .find(|letter| letter.as_char() == c)
            .ok_or(DiceKeyError::InvalidLetter(c))
    }

    /// Uppercase character for this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
            Self::I => 'I',
            Self::J => 'J',
            Self::K => 'K',
            Self::L => 'L',
            Self::M => 'M',
            Self::N => 'N',
            Self::O => 'O',
            Self::P => 'P',
            Self::R => 'R',
            Self::S => 'S',
            Self::T => 'T',
            Self::U => 'U',
            Self::V => 'V',
            Self::W => 'W',
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }
}

/// Digit printed on a die face (1 through 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum FaceDigit {
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
}

impl FaceDigit {
    /// All six digits in ascending order.
    pub const ALL: [Self; 6] = [Self::D1, Self::D2, Self::D3, Self::D4, Self::D5, Self::D6];

    /// Parse a digit character `'1'..='6'`.
    pub fn from_char(c: char) -> Result<Self, DiceKeyError> {
        match c {
            '1' => Ok(Self::D1),
            '2' => Ok(Self::D2),
            '3' => Ok(Self::D3),
            '4' => Ok(Self::D4),
            '5' => Ok(Self::D5),
            '6' => Ok(Self::D6),
            other => Err(DiceKeyError::InvalidDigit(other)),
        }
    }

    /// Character for this digit.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::D1 => '1',
            Self::D2 => '2',
            Self::D3 => '3',
            Self::D4 => '4',
            Self::D5 => '5',
            Self::D6 => '6',
        }
    }
}

/// Rotation of a face relative to the top of the grid.
///
/// Serialized as the lowercase letters `t`, `r`, `b`, `l`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Upright
    #[default]
    #[serde(rename = "t")]
    Top,
    /// Top of the face points right
    #[serde(rename = "r")]
    Right,
    /// Upside down
    #[serde(rename = "b")]
    Bottom,
    /// Top of the face points left
    #[serde(rename = "l")]
    Left,
}

impl Orientation {
    /// All orientations in clockwise order starting from `Top`.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Orientation after turning the face 90 degrees clockwise.
    #[must_use]
    pub const fn rotate90(self) -> Self {
        match self {
            Self::Top => Self::Right,
            Self::Right => Self::Bottom,
            Self::Bottom => Self::Left,
            Self::Left => Self::Top,
        }
    }

    /// Parse `t`, `r`, `b`, or `l`.
    pub fn from_char(c: char) -> Result<Self, DiceKeyError> {
        match c {
            't' => Ok(Self::Top),
            'r' => Ok(Self::Right),
            'b' => Ok(Self::Bottom),
            'l' => Ok(Self::Left),
            other => Err(DiceKeyError::InvalidOrientation(other)),
        }
    }

    /// Lowercase character for this orientation.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Top => 't',
            Self::Right => 'r',
            Self::Bottom => 'b',
            Self::Left => 'l',
        }
    }
}

/// A single die face as read from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    /// Letter on the face
    pub letter: FaceLetter,
    /// Digit on the face
    pub digit: FaceDigit,
    /// Rotation relative to the top of the grid
    pub orientation: Orientation,
}

impl Face {
    /// Create a face.
    #[must_use]
    pub const fn new(letter: FaceLetter, digit: FaceDigit, orientation: Orientation) -> Self {
        Self { letter, digit, orientation }
    }

    /// Same letter and digit, orientation advanced one step clockwise.
    #[must_use]
    pub const fn rotated90(self) -> Self {
        Self { orientation: self.orientation.rotate90(), ..self }
    }

    /// Same letter and digit, orientation forced to `Top`.
    #[must_use]
    pub const fn without_orientation(self) -> Self {
        Self { orientation: Orientation::Top, ..self }
    }

    /// Append this face's human-readable triple (or pair) to `out`.
    pub(crate) fn write_human_readable(self, out: &mut String, include_orientation: bool) {
        out.push(self.letter.as_char());
        out.push(self.digit.as_char());
        if include_orientation {
            out.push(self.orientation.as_char());
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter.as_char(), self.digit.as_char(), self.orientation.as_char())
    }
}
