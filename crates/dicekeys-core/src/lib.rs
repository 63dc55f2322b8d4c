//! DiceKey Core
//!
//! Face model and seed canonicalization for DiceKeys. A DiceKey is 25 dice in
//! a 5x5 grid; each die shows a letter, a digit, and a rotational orientation.
//! The same physical key can be read starting from any of its four corners, so
//! every reading is rotated into a canonical form before it becomes a seed.
//!
//! ```text
//! Face reads (optical pipeline)
//!        │
//!        ▼
//! DiceKey (25 faces, row-major)
//!        │
//!        ▼
//! Canonical rotation (smallest human-readable form)
//!        │
//!        ▼
//! Seed string → external key derivation
//! ```
//!
//! # Invariants
//!
//! - A `DiceKey` always holds exactly 25 faces.
//! - Rotating a key four times yields the original key.
//! - `to_seed` is identical for every rotation of the same key.
//!
//! All operations are pure functions over immutable values.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod dice_key;
pub mod error;
pub mod face;
pub mod face_read;

pub use dice_key::{CLOCKWISE_90_DEGREE_ROTATION, DiceKey, NUMBER_OF_FACES};
pub use error::DiceKeyError;
pub use face::{Face, FaceDigit, FaceLetter, Orientation};
pub use face_read::FaceRead;
